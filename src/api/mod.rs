//! Twitter guest API module.
//!
//! This module provides:
//! - HTTP client for the player page, script bundle, and media config API
//! - Bearer token scraping and guest token exchange
//! - Marker-based text extraction
//! - API response types

pub mod client;
pub mod extract;
pub mod types;

pub use client::TwitterApi;
pub use extract::slice_between;
pub use types::*;
