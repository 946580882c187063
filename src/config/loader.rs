//! Configuration structures and loading logic.

use crate::config::strategy::RenditionStrategy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Remote endpoint configuration.
///
/// Defaults are the production Twitter endpoints; tests override these to
/// point at a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Embedded video player page, suffixed with the tweet ID.
    #[serde(default = "default_player_url")]
    pub player_url: String,

    /// Media configuration API, suffixed with `<tweet-id>.json`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Host that serves media segments and manifests.
    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Guest token activation endpoint.
    #[serde(default = "default_guest_token_url")]
    pub guest_token_url: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory output files are written into. Defaults to the current
    /// working directory.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// How to pick a rendition out of a stream manifest.
    #[serde(default)]
    pub rendition_strategy: RenditionStrategy,

    /// Path to the ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Abort a remux that runs longer than this many seconds.
    #[serde(default)]
    pub ffmpeg_timeout_seconds: Option<u64>,

    /// Browser user agent string sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            player_url: default_player_url(),
            api_url: default_api_url(),
            media_url: default_media_url(),
            guest_token_url: default_guest_token_url(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            rendition_strategy: RenditionStrategy::default(),
            ffmpeg_path: default_ffmpeg_path(),
            ffmpeg_timeout_seconds: None,
            user_agent: default_user_agent(),
            show_downloads: true,
        }
    }
}

fn default_player_url() -> String {
    "https://twitter.com/i/videos/tweet/".to_string()
}

fn default_api_url() -> String {
    "https://api.twitter.com/1.1/videos/tweet/config/".to_string()
}

fn default_media_url() -> String {
    "https://video.twimg.com".to_string()
}

fn default_guest_token_url() -> String {
    "https://api.twitter.com/1.1/guest/activate.json".to_string()
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or fall back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                "Configuration file not found: {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(
            config.endpoints.player_url,
            "https://twitter.com/i/videos/tweet/"
        );
        assert_eq!(
            config.endpoints.api_url,
            "https://api.twitter.com/1.1/videos/tweet/config/"
        );
        assert_eq!(config.endpoints.media_url, "https://video.twimg.com");
        assert_eq!(
            config.endpoints.guest_token_url,
            "https://api.twitter.com/1.1/guest/activate.json"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [endpoints]
            media_url = "http://127.0.0.1:9000"

            [options]
            rendition_strategy = "bandwidth"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.media_url, "http://127.0.0.1:9000");
        assert_eq!(
            config.endpoints.player_url,
            "https://twitter.com/i/videos/tweet/"
        );
        assert_eq!(
            config.options.rendition_strategy,
            RenditionStrategy::Bandwidth
        );
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(
            config.options.rendition_strategy,
            RenditionStrategy::TrailingLine
        );
        assert_eq!(config.options.ffmpeg_path, PathBuf::from("ffmpeg"));
        assert!(config.options.ffmpeg_timeout_seconds.is_none());
    }
}
