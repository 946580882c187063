//! Rendition selection strategy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to choose a rendition out of a stream manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionStrategy {
    /// Take the second-to-last manifest line (default). Manifests are
    /// conventionally ordered ascending by quality with an empty trailing
    /// line, so this usually lands on the highest quality. Best-effort.
    #[default]
    TrailingLine,
    /// Parse the manifest as an HLS master playlist and take the variant
    /// with the highest declared bandwidth.
    Bandwidth,
}

impl fmt::Display for RenditionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenditionStrategy::TrailingLine => write!(f, "trailing-line"),
            RenditionStrategy::Bandwidth => write!(f, "bandwidth"),
        }
    }
}

impl FromStr for RenditionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trailing-line" => Ok(RenditionStrategy::TrailingLine),
            "bandwidth" => Ok(RenditionStrategy::Bandwidth),
            _ => Err(format!("Unknown rendition strategy: {}", s)),
        }
    }
}
