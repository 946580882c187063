//! Playback descriptor classification.

/// File extensions treated as directly downloadable media files.
const DIRECT_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov"];

/// Manifest format marker; a URL containing it is never a direct file.
const MANIFEST_MARKER: &str = ".m3u8";

/// A resolved playback URL, classified by delivery mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// A single progressive media file.
    Direct { url: String, extension: String },

    /// A segmented-stream manifest that needs a secondary fetch and a remux.
    Manifest { url: String },
}

impl Playback {
    /// Classify a playback URL.
    ///
    /// A URL ending in a recognized media file extension with no manifest
    /// marker anywhere in it is a direct file; everything else is treated
    /// as a manifest.
    pub fn classify(url: &str) -> Self {
        if !url.contains(MANIFEST_MARKER) {
            for ext in DIRECT_EXTENSIONS {
                if url.ends_with(&format!(".{}", ext)) {
                    return Playback::Direct {
                        url: url.to_string(),
                        extension: (*ext).to_string(),
                    };
                }
            }
        }

        Playback::Manifest {
            url: url.to_string(),
        }
    }
}
