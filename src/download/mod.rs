//! Download module.
//!
//! This module provides:
//! - Playback descriptor classification
//! - Direct media file downloading
//! - Stream manifest handling and rendition selection
//! - External remuxer invocation
//! - Batch outcome tracking

pub mod direct;
pub mod manifest;
pub mod playback;
pub mod remux;
pub mod state;

pub use direct::download_direct;
pub use manifest::{download_manifest, select_rendition};
pub use playback::Playback;
pub use remux::remux_to_mp4;
pub use state::{BatchState, DownloadOutcome};
