//! Modal dialog state for the UI.

use crate::state::NewsItem;

/// Overlay currently drawn on top of the main layout.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Error or informational message.
    Alert {
        /// Headline (e.g., "Category not found!").
        title: String,
        /// Detail text.
        message: String,
    },
    /// Full article view.
    Details {
        /// Article to show.
        item: Box<NewsItem>,
        /// Vertical scroll offset of the body.
        scroll: u16,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether any overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
