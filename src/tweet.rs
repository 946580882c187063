//! Tweet reference parsing.

use crate::error::{Error, Result};

/// A single tweet, identified from its URL.
///
/// Constructed once per input and never cached across inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRef {
    /// Author handle (path segment 3 of the tweet URL).
    pub author: String,

    /// Tweet ID (path segment 5 of the tweet URL).
    pub id: String,

    /// The original input URL.
    pub url: String,
}

impl TweetRef {
    /// Parse a tweet reference from a URL by positional path segments.
    ///
    /// `https://twitter.com/{author}/status/{id}` splits on `/` into
    /// `["https:", "", "twitter.com", author, "status", id]`. No further
    /// structural validation is performed.
    pub fn parse(url: &str) -> Result<Self> {
        let parts: Vec<&str> = url.split('/').collect();

        let author = parts
            .get(3)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Parse(format!("Tweet URL has no author segment: {}", url)))?;

        let id = parts
            .get(5)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Parse(format!("Tweet URL has no ID segment: {}", url)))?;

        Ok(Self {
            author: (*author).to_string(),
            id: (*id).to_string(),
            url: url.to_string(),
        })
    }
}
