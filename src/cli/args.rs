//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, RenditionStrategy};

/// Tweet video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitter-videodl",
    version,
    about = "Download videos embedded in tweets",
    long_about = "A CLI tool to download the video attached to one or more tweets.\n\n\
                  Direct MP4 files are stream-copied to disk; segmented streams are\n\
                  remuxed into a single MP4 with ffmpeg."
)]
pub struct Args {
    /// Tweet URL(s) to download, processed in order.
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Directory to write downloaded files into.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Rendition selection strategy for stream manifests.
    #[arg(long, value_enum)]
    pub strategy: Option<RenditionStrategyArg>,

    /// Path to the ffmpeg binary.
    #[arg(long, env = "TWITTER_VIDEODL_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Abort a remux that runs longer than this many seconds.
    #[arg(long)]
    pub ffmpeg_timeout: Option<u64>,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI rendition strategy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RenditionStrategyArg {
    /// Take the second-to-last manifest line (usually highest quality).
    TrailingLine,
    /// Take the highest-bandwidth variant of an HLS master playlist.
    Bandwidth,
}

impl From<RenditionStrategyArg> for RenditionStrategy {
    fn from(arg: RenditionStrategyArg) -> Self {
        match arg {
            RenditionStrategyArg::TrailingLine => RenditionStrategy::TrailingLine,
            RenditionStrategyArg::Bandwidth => RenditionStrategy::Bandwidth,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output_directory {
            config.options.output_directory = Some(dir.clone());
        }

        if let Some(strategy) = self.strategy {
            config.options.rendition_strategy = strategy.into();
        }

        if let Some(ffmpeg) = &self.ffmpeg {
            config.options.ffmpeg_path = ffmpeg.clone();
        }

        if let Some(timeout) = self.ffmpeg_timeout {
            config.options.ffmpeg_timeout_seconds = Some(timeout);
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}
