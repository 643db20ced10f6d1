//! Theme palette, settings and config paths for headliner.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

use std::sync::OnceLock;

/// Path resolution for config directories.
mod paths;
/// Settings access and parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{DEFAULT_API_BASE_URL, Settings, Theme};

/// Process-wide palette.
static THEME: OnceLock<Theme> = OnceLock::new();

/// Palette used by the renderers.
#[must_use]
pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::default)
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
