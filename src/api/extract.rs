//! Marker-based text extraction.
//!
//! The player page and its script bundle are not parsed structurally; the
//! values we need sit between fixed text markers. All of that fragility is
//! confined to this one function so the heuristic can change without
//! touching callers.

use crate::error::{Error, Result};

/// Extract the text strictly between the first occurrence of `marker` and
/// the next occurrence of `terminator` after it.
pub fn slice_between<'a>(haystack: &'a str, marker: &str, terminator: &str) -> Result<&'a str> {
    let start = haystack
        .find(marker)
        .ok_or_else(|| Error::Parse(format!("Marker {:?} not found", marker)))?
        + marker.len();

    let rest = &haystack[start..];
    let end = rest.find(terminator).ok_or_else(|| {
        Error::Parse(format!(
            "Terminator {:?} not found after marker {:?}",
            terminator, marker
        ))
    })?;

    Ok(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_between_markers() {
        let html = r#"<script src="https://abs.twimg.com/web-video-player/TwitterVideoPlayerIframe.abc123.js"></script>"#;
        let slice = slice_between(html, "src=\"", ".js").unwrap();
        assert_eq!(
            slice,
            "https://abs.twimg.com/web-video-player/TwitterVideoPlayerIframe.abc123"
        );
    }

    #[test]
    fn test_extracts_quoted_token() {
        let js = r#"var r={authorization:"Bearer AAAAbbbbCCCC",other:1}"#;
        let token = slice_between(js, "r={authorization:\"", "\"").unwrap();
        assert_eq!(token, "Bearer AAAAbbbbCCCC");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "a[one]b[two]";
        assert_eq!(slice_between(text, "[", "]").unwrap(), "one");
    }

    #[test]
    fn test_missing_marker() {
        let err = slice_between("no markers here", "src=\"", ".js").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_missing_terminator() {
        let err = slice_between("src=\"unterminated", "src=\"", ".js").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_terminator_before_marker_not_matched() {
        // The terminator search starts after the marker.
        let text = ".js before src=\"path.js";
        assert_eq!(slice_between(text, "src=\"", ".js").unwrap(), "path");
    }
}
