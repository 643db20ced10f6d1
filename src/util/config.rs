//! Configuration file parsing utilities.
//!
//! Helpers for `settings.conf`: comment skipping, `key = value` splitting,
//! inline comment removal and key normalization.

/// What: Check if a line should be skipped (empty or comment).
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Output:
/// - `Some((key, value))` with the key normalized by [`normalize_key`] and the value stripped
///   of inline comments; `None` when the line has no `=` or an empty key.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = normalize_key(raw_key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// Lowercase a key and fold `.`, `-` and spaces into `_`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Remove a trailing ` # comment` or ` // comment` from a value.
///
/// Details:
/// - `//` is only treated as a comment when preceded by whitespace, so URLs survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}
