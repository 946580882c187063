//! Twitter VideoDL - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use twitter_videodl::{
    api::TwitterApi,
    cli::Args,
    config::Config,
    download::{download_direct, download_manifest, BatchState, DownloadOutcome, Playback},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_batch_stats, print_error, print_info, print_success},
    tweet::TweetRef,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(failed) if failed > 0 => ExitCode::from(exit_codes::SOME_INPUTS_FAILED as u8),
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Network(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::NETWORK_ERROR as u8)
                }
                Error::Parse(_) | Error::Json(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::PARSE_ERROR as u8)
                }
                Error::FFmpeg(_) | Error::FFmpegNotFound | Error::FFmpegTimeout(_) => {
                    ExitCode::from(exit_codes::TOOL_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<u64> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    if !args.quiet {
        print_banner();
    }

    // Load configuration and merge CLI arguments
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);

    // Initialize API client
    let api = TwitterApi::new(config.endpoints.clone(), &config.options.user_agent)?;

    // Process each tweet URL in order; a failure on one input does not
    // abort the batch.
    let mut state = BatchState::default();

    for url in &args.urls {
        print_info(&format!("Downloading: {}", url));

        match process_tweet(&api, &config, url).await {
            Ok(DownloadOutcome::Downloaded(path)) => {
                print_success(&format!("Download completed: {}", path.display()));
                state.record(&DownloadOutcome::Downloaded(path));
            }
            Ok(DownloadOutcome::Skipped(path)) => {
                print_info(&format!("Already downloaded: {}", path.display()));
                state.record(&DownloadOutcome::Skipped(path));
            }
            Err(e) => {
                print_error(&format!("Failed to process {}: {}", url, e));
                state.mark_failed();
            }
        }
    }

    print_batch_stats(&state);

    Ok(state.failed_count)
}

/// Process a single tweet URL to completion.
async fn process_tweet(api: &TwitterApi, config: &Config, url: &str) -> Result<DownloadOutcome> {
    let tweet = TweetRef::parse(url)?;
    tracing::info!("Processing tweet {} by @{}", tweet.id, tweet.author);

    let bearer_token = api.fetch_bearer_token(&tweet).await?;
    let playback_url = api.resolve_playback_url(&tweet, &bearer_token).await?;
    tracing::debug!("Resolved playback URL: {}", playback_url);

    match Playback::classify(&playback_url) {
        Playback::Direct { url, extension } => {
            download_direct(api, config, &tweet, &url, &extension).await
        }
        Playback::Manifest { url } => download_manifest(api, config, &tweet, &url).await,
    }
}
