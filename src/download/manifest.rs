//! Stream manifest handling and rendition selection.

use crate::api::TwitterApi;
use crate::config::{Config, RenditionStrategy};
use crate::download::remux::remux_to_mp4;
use crate::download::state::DownloadOutcome;
use crate::error::{Error, Result};
use crate::output::create_spinner;
use crate::tweet::TweetRef;

/// Download a manifest-delivered video to `<id>.mp4` in the output
/// directory, remuxing the selected rendition with ffmpeg.
pub async fn download_manifest(
    api: &TwitterApi,
    config: &Config,
    tweet: &TweetRef,
    manifest_url: &str,
) -> Result<DownloadOutcome> {
    let output_dir = config.output_directory();
    let output_path = output_dir.join(format!("{}.mp4", tweet.id));

    if output_path.exists() {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadOutcome::Skipped(output_path));
    }

    tokio::fs::create_dir_all(&output_dir).await?;

    let content = api.fetch_manifest(manifest_url).await?;
    let rendition = select_rendition(&content, config.options.rendition_strategy)?;
    let input_url = resolve_input_url(&config.endpoints.media_url, manifest_url, &rendition)?;

    tracing::info!("Remuxing rendition: {}", input_url);

    let spinner = if config.options.show_downloads {
        Some(create_spinner("Remuxing stream..."))
    } else {
        None
    };

    let result = remux_to_mp4(&config.options, &input_url, &output_path).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    result?;

    Ok(DownloadOutcome::Downloaded(output_path))
}

/// Select a rendition path out of the manifest text.
pub fn select_rendition(content: &str, strategy: RenditionStrategy) -> Result<String> {
    match strategy {
        RenditionStrategy::TrailingLine => select_trailing_line(content),
        RenditionStrategy::Bandwidth => select_highest_bandwidth(content),
    }
}

/// Take the second-to-last manifest line.
///
/// Fetched manifests end with an empty trailing line, and renditions are
/// conventionally listed ascending by quality, so this usually lands on the
/// highest quality. Best-effort, not a contract.
fn select_trailing_line(content: &str) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines.len() < 2 {
        return Err(Error::Parse(format!(
            "Manifest has too few lines to select a rendition ({})",
            lines.len()
        )));
    }

    Ok(lines[lines.len() - 2].to_string())
}

/// Parse the manifest as an HLS master playlist and take the variant with
/// the highest declared bandwidth.
fn select_highest_bandwidth(content: &str) -> Result<String> {
    let playlist = m3u8_rs::parse_playlist_res(content.as_bytes())
        .map_err(|e| Error::Parse(format!("Failed to parse playlist: {:?}", e)))?;

    match playlist {
        m3u8_rs::Playlist::MasterPlaylist(master) => {
            let variant = master
                .variants
                .iter()
                .max_by_key(|v| v.bandwidth)
                .ok_or_else(|| Error::Parse("No variants in master playlist".into()))?;

            Ok(variant.uri.clone())
        }
        m3u8_rs::Playlist::MediaPlaylist(_) => Err(Error::Parse(
            "Expected a master playlist with rendition variants".into(),
        )),
    }
}

/// Resolve a selected rendition to the remuxer input URL.
///
/// Absolute URLs pass through; absolute paths are served by the media host;
/// anything else is resolved relative to the manifest URL.
fn resolve_input_url(media_url: &str, manifest_url: &str, rendition: &str) -> Result<String> {
    if rendition.starts_with("http://") || rendition.starts_with("https://") {
        return Ok(rendition.to_string());
    }

    if rendition.starts_with('/') {
        return Ok(format!("{}{}", media_url, rendition));
    }

    let base = url::Url::parse(manifest_url)?;
    Ok(base.join(rendition)?.to_string())
}
