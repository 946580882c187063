//! Twitter VideoDL - download videos embedded in tweets
//!
//! This library resolves the video attached to a tweet and downloads it.
//! The resolution is a chain of dependent guest API calls: scrape the
//! embedded player page and its script bundle for a bearer token, exchange
//! it for a short-lived guest token, then query the media configuration
//! endpoint for a playback URL. Direct MP4 files are stream-copied to disk;
//! segmented streams are remuxed into a single MP4 with ffmpeg.
//!
//! # Example
//!
//! ```no_run
//! use twitter_videodl::{Config, TweetRef, TwitterApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = TwitterApi::new(config.endpoints.clone(), &config.options.user_agent)?;
//!
//!     let tweet = TweetRef::parse("https://twitter.com/user/status/12345")?;
//!     let bearer_token = api.fetch_bearer_token(&tweet).await?;
//!     let playback_url = api.resolve_playback_url(&tweet, &bearer_token).await?;
//!     println!("{}", playback_url);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod output;
pub mod tweet;

// Re-exports for convenience
pub use api::TwitterApi;
pub use config::{Config, RenditionStrategy};
pub use download::{download_direct, download_manifest, BatchState, DownloadOutcome, Playback};
pub use error::{Error, Result};
pub use tweet::TweetRef;
