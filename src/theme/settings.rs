use std::fs;
use std::path::Path;

use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::state::{SortOrder, StatusFilter};
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Load user settings from `settings.conf`.
/// Falls back to `Settings::default()` when missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    match resolve_settings_config_path() {
        Some(p) => load_settings_from(&p),
        None => {
            tracing::debug!("no settings.conf found; using defaults");
            Settings::default()
        }
    }
}

/// What: Load settings from an explicit file path.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings; using defaults"
            );
            Settings::default()
        }
    }
}

/// What: Parse `settings.conf` content.
///
/// Details:
/// - Unknown keys are logged and ignored.
/// - Invalid values keep the default for that key.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            tracing::warn!(line = %line.trim(), "settings line without '='");
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" => {
                let trimmed = val.trim_end_matches('/');
                if trimmed.is_empty() {
                    tracing::warn!("empty api_base_url; keeping default");
                } else {
                    out.api_base_url = trimmed.to_string();
                }
            }
            "default_category" => {
                if let Ok(v) = val.parse::<usize>() {
                    out.default_category = v;
                } else {
                    tracing::warn!(value = %val, "invalid default_category");
                }
            }
            "status_filter" | "filter" => {
                if let Some(f) = StatusFilter::from_config_key(&val) {
                    out.status_filter = f;
                } else {
                    tracing::warn!(value = %val, "invalid status_filter");
                }
            }
            "sort_order" | "sort" => {
                if let Some(o) = SortOrder::from_config_key(&val) {
                    out.sort_order = o;
                } else {
                    tracing::warn!(value = %val, "invalid sort_order");
                }
            }
            "request_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => out.request_timeout_secs = v,
                _ => tracing::warn!(value = %val, "invalid request_timeout_secs"),
            },
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    /// What: All supported keys parse, with comments and aliases
    ///
    /// - Input: settings text covering every key
    /// - Output: Matching `Settings` values
    fn settings_parse_all_keys() {
        let s = parse_settings(
            "# headliner settings\n\
             api_base_url = https://news.example.org/api/news/  # trailing slash dropped\n\
             default_category = 3\n\
             status_filter = trending\n\
             sort = higherFirst\n\
             request_timeout_secs = 5\n\
             unknown_key = 1\n",
        );
        assert_eq!(s.api_base_url, "https://news.example.org/api/news");
        assert_eq!(s.default_category, 3);
        assert_eq!(s.status_filter, StatusFilter::Trending);
        assert_eq!(s.sort_order, SortOrder::HighestFirst);
        assert_eq!(s.request_timeout_secs, 5);
    }

    #[test]
    /// What: Invalid values keep defaults
    ///
    /// - Input: Non-numeric index, unknown filter/sort, zero timeout
    /// - Output: `Settings::default()`
    fn settings_invalid_values_keep_defaults() {
        let s = parse_settings(
            "default_category = two\nstatus_filter = hot\nsort_order = random\nrequest_timeout_secs = 0\n",
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Loading from a file reads it; a missing file yields defaults
    ///
    /// - Input: Temp file with a sort override; nonexistent path
    /// - Output: Override applied; defaults for missing path
    fn settings_load_from_file_and_missing() {
        let mut f = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(f, "sort_order = lowest_first").expect("write");
        let s = load_settings_from(f.path());
        assert_eq!(s.sort_order, SortOrder::LowestFirst);

        let dir = tempfile::tempdir().expect("tempdir");
        let missing = load_settings_from(&dir.path().join("nope.conf"));
        assert_eq!(missing, Settings::default());
    }
}
