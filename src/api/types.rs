//! API response type definitions.

use serde::Deserialize;

/// Response from the guest token activation endpoint.
#[derive(Debug, Deserialize)]
pub struct GuestTokenResponse {
    pub guest_token: String,
}

/// Response from the video configuration endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoConfigResponse {
    pub track: Track,
}

/// Playback track information.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub playback_url: String,
}
