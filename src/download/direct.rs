//! Direct media file downloading.

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::TwitterApi;
use crate::config::Config;
use crate::download::state::DownloadOutcome;
use crate::error::{Error, Result};
use crate::output::create_download_bar;
use crate::tweet::TweetRef;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download a direct media file to `<id>.<ext>` in the output directory.
///
/// An existing destination file short-circuits before any network request
/// is made.
pub async fn download_direct(
    api: &TwitterApi,
    config: &Config,
    tweet: &TweetRef,
    url: &str,
    extension: &str,
) -> Result<DownloadOutcome> {
    let output_dir = config.output_directory();
    let output_path = output_dir.join(format!("{}.{}", tweet.id, extension));

    if output_path.exists() {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadOutcome::Skipped(output_path));
    }

    tokio::fs::create_dir_all(&output_dir).await?;

    let response = api.download_file(url).await?;

    let content_length = response.content_length();
    let show_progress = config.options.show_downloads
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_progress {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    // Stream to file
    let mut file = File::create(&output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Network(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(DownloadOutcome::Downloaded(output_path))
}
