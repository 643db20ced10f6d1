//! Display labels and fallbacks for article fields.

use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthChar;

use crate::state::{NewsItem, Rating};

/// Number of body characters shown in the list excerpt.
pub const EXCERPT_CHARS: usize = 200;

/// What: Build the list excerpt of an article body.
///
/// Output:
/// - First [`EXCERPT_CHARS`] characters followed by `...`.
#[must_use]
pub fn excerpt(details: &str) -> String {
    let head: String = details.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

/// Author name or `"Author name unknown"`.
#[must_use]
pub fn author_label(item: &NewsItem) -> String {
    item.author
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| "Author name unknown".to_string(), ToString::to_string)
}

/// What: Publish date label.
///
/// Output:
/// - `Aug 24, 2022` when the API timestamp parses, the raw string when it does not,
///   `"Published date unknown"` when missing.
#[must_use]
pub fn published_label(item: &NewsItem) -> String {
    let Some(raw) = item
        .author
        .published_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return "Published date unknown".to_string();
    };
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%b %d, %Y").to_string())
}

/// View count label: `"{n}K"` or `"No views"` for missing/zero.
#[must_use]
pub fn views_label(item: &NewsItem) -> String {
    match item.total_view {
        Some(v) if v > 0 => format!("{v}K"),
        _ => "No views".to_string(),
    }
}

/// What: Render a 0..=5 rating as five star glyphs.
///
/// Details:
/// - Full stars for the integer part, one half star for a fraction of at least .5,
///   hollow stars for the rest. Missing ratings render as five hollow stars.
#[must_use]
pub fn rating_stars(rating: Option<&Rating>) -> String {
    let value = rating.map_or(0.0, |r| r.number).clamp(0.0, 5.0);
    let halves = (value * 2.0).floor();
    let mut out = String::new();
    for i in 0..5u8 {
        let pos = f64::from(i) * 2.0;
        if halves >= pos + 2.0 {
            out.push('★');
        } else if halves >= pos + 1.0 {
            out.push('⯪');
        } else {
            out.push('☆');
        }
    }
    out
}

/// What: Truncate `s` to at most `max_width` terminal columns, appending `…` when cut.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            if out.pop().is_some() {
                out.push('…');
            }
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
