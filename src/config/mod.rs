//! Configuration module for twitter-videodl.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Endpoint URL overrides (for pointing at test servers)
//! - Rendition selection strategy

pub mod loader;
pub mod strategy;

pub use loader::{Config, EndpointsConfig, OptionsConfig};
pub use strategy::RenditionStrategy;
