//! Small utility helpers for configuration parsing, URL building and display formatting.

use std::fmt::Write;

pub mod config;
pub mod format;

pub use format::{
    author_label, excerpt, published_label, rating_stars, truncate_to_width, views_label,
};

/// What: Percent-encode a single URL path segment.
///
/// Details:
/// - Keeps RFC 3986 unreserved characters; every other byte becomes `%XX`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Ids pass through and unsafe bytes are escaped
    ///
    /// - Input: Hex id; string with slash and space
    /// - Output: Id unchanged; "%2F" and "%20" escapes
    fn util_percent_encode_path_segment() {
        assert_eq!(
            super::percent_encode("0282e0e58a5c404fbd15261f11c2ab6a"),
            "0282e0e58a5c404fbd15261f11c2ab6a"
        );
        assert_eq!(super::percent_encode("a/b c"), "a%2Fb%20c");
    }
}
