//! Twitter guest API HTTP client.

use reqwest::{header, Client, Response};

use crate::api::extract::slice_between;
use crate::api::types::{GuestTokenResponse, VideoConfigResponse};
use crate::config::EndpointsConfig;
use crate::error::{Error, Result};
use crate::tweet::TweetRef;

/// Marker preceding the script bundle URL in the player page HTML.
const SCRIPT_SRC_MARKER: &str = "src=\"";

/// Extension terminating the script bundle URL.
const SCRIPT_EXTENSION: &str = ".js";

/// Marker preceding the bearer token in the script bundle source.
const AUTHORIZATION_MARKER: &str = "r={authorization:\"";

/// Guest token request header.
const GUEST_TOKEN_HEADER: &str = "x-guest-token";

/// HTTP client for the unauthenticated (guest) Twitter video API.
pub struct TwitterApi {
    client: Client,
    endpoints: EndpointsConfig,
}

impl TwitterApi {
    /// Create a new API client against the given endpoints.
    pub fn new(endpoints: EndpointsConfig, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoints })
    }

    /// Make a GET request and return the body text, checking the status.
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("GET {} failed: HTTP {}", url, status)));
        }

        Ok(response.text().await?)
    }

    /// Scrape the embedded player page and its script bundle for the bearer
    /// token.
    ///
    /// The player page references a single script bundle in a `src`
    /// attribute; the bundle embeds the token as a quoted string after an
    /// authorization field. Two requests, no retries.
    pub async fn fetch_bearer_token(&self, tweet: &TweetRef) -> Result<String> {
        let player_url = format!("{}{}", self.endpoints.player_url, tweet.id);
        let html = self.get_text(&player_url).await?;

        let script_path = slice_between(&html, SCRIPT_SRC_MARKER, SCRIPT_EXTENSION)?;
        let script_url = format!("{}{}", script_path, SCRIPT_EXTENSION);

        let script = self.get_text(&script_url).await?;
        let token = slice_between(&script, AUTHORIZATION_MARKER, "\"")?;

        tracing::debug!("Extracted bearer token ({} chars)", token.len());
        Ok(token.to_string())
    }

    /// Exchange the bearer token for a short-lived guest token.
    pub async fn activate_guest_token(&self, bearer_token: &str) -> Result<String> {
        tracing::debug!("POST {}", self.endpoints.guest_token_url);

        let response = self
            .client
            .post(&self.endpoints.guest_token_url)
            .header(header::AUTHORIZATION, bearer_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "Guest token activation failed: HTTP {}",
                status
            )));
        }

        let text = response.text().await?;
        let parsed: GuestTokenResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Parse(format!(
                "Failed to parse guest token response: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(parsed.guest_token)
    }

    /// Resolve the playback URL for a tweet.
    ///
    /// A fresh guest token is requested on every resolution; tokens are
    /// never reused across calls.
    pub async fn resolve_playback_url(
        &self,
        tweet: &TweetRef,
        bearer_token: &str,
    ) -> Result<String> {
        let guest_token = self.activate_guest_token(bearer_token).await?;

        let config_url = format!("{}{}.json", self.endpoints.api_url, tweet.id);
        tracing::debug!("GET {}", config_url);

        let response = self
            .client
            .get(&config_url)
            .header(header::AUTHORIZATION, bearer_token)
            .header(GUEST_TOKEN_HEADER, &guest_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "Video config request failed: HTTP {}",
                status
            )));
        }

        let text = response.text().await?;
        let parsed: VideoConfigResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Parse(format!(
                "Failed to parse video config: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(parsed.track.playback_url)
    }

    /// Fetch the raw text of a stream manifest. No parsing happens here.
    pub async fn fetch_manifest(&self, url: &str) -> Result<String> {
        self.get_text(url).await
    }

    /// Download a file from a URL (streaming response).
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
