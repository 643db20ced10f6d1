use ratatui::style::Color;

use crate::state::{SortOrder, StatusFilter};

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            crust: Color::Rgb(17, 17, 27),       // #11111b
            surface2: Color::Rgb(88, 91, 112),   // #585b70
            overlay1: Color::Rgb(127, 132, 156), // #7f849c
            overlay2: Color::Rgb(147, 153, 178), // #9399b2
            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext0: Color::Rgb(166, 173, 200), // #a6adc8
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            green: Color::Rgb(166, 227, 161),    // #a6e3a1
            yellow: Color::Rgb(249, 226, 175),   // #f9e2af
            red: Color::Rgb(243, 139, 168),      // #f38ba8
            lavender: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}

/// Default news API root.
pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api/news";

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the news API (no trailing slash).
    pub api_base_url: String,
    /// Index of the category opened on startup.
    pub default_category: usize,
    /// Initial status filter.
    pub status_filter: StatusFilter,
    /// Initial view-count order.
    pub sort_order: SortOrder,
    /// Total timeout for a single API request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_category: 1,
            status_filter: StatusFilter::None,
            sort_order: SortOrder::Default,
            request_timeout_secs: 20,
        }
    }
}
