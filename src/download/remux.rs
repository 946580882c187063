//! External ffmpeg invocation.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::OptionsConfig;
use crate::error::{Error, Result};

/// Remux a stream into a single MP4 file using ffmpeg.
///
/// Stream copy only, no re-encode; the audio bitstream filter corrects ADTS
/// framing for the MP4 container. Blocks until the process exits, or until
/// the configured timeout kills it.
pub async fn remux_to_mp4(options: &OptionsConfig, input_url: &str, output: &Path) -> Result<()> {
    let output_str = output
        .to_str()
        .ok_or_else(|| Error::FFmpeg("Invalid path encoding for output".into()))?;

    let mut command = Command::new(&options.ffmpeg_path);
    command
        .args([
            "-hide_banner",
            "-loglevel",
            "error",
            "-i",
            input_url,
            "-c",
            "copy",
            "-bsf:a",
            "aac_adtstoasc",
            output_str,
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    tracing::debug!("Running {} -i {} -> {}", options.ffmpeg_path.display(), input_url, output_str);

    let mut child = command.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FFmpegNotFound
        } else {
            Error::FFmpeg(format!("Failed to run ffmpeg: {}", e))
        }
    })?;

    let status = match options.ffmpeg_timeout_seconds {
        Some(secs) => {
            match tokio::time::timeout(Duration::from_secs(secs), child.wait()).await {
                Ok(status) => status
                    .map_err(|e| Error::FFmpeg(format!("Failed to wait for ffmpeg: {}", e)))?,
                Err(_) => {
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                    return Err(Error::FFmpegTimeout(secs));
                }
            }
        }
        None => child
            .wait()
            .await
            .map_err(|e| Error::FFmpeg(format!("Failed to wait for ffmpeg: {}", e)))?,
    };

    if !status.success() {
        return Err(Error::FFmpeg(format!(
            "ffmpeg exited with status: {}",
            status
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_missing_binary_maps_to_not_found() {
        let options = OptionsConfig {
            ffmpeg_path: PathBuf::from("ffmpeg-definitely-not-installed"),
            ..Default::default()
        };

        let err = remux_to_mp4(&options, "http://127.0.0.1:1/in.m3u8", Path::new("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FFmpegNotFound));
    }
}
