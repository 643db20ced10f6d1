//! Central `AppState` container owned by the runtime loop.

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::news_set::{DisplayedNews, NewsSetState};
use crate::state::types::{Category, NewsItem, SortOrder, StatusFilter};

/// Outstanding fetches per API boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InFlight {
    /// Category list request pending.
    pub categories: bool,
    /// Latest category-news request pending.
    pub category_news: bool,
    /// Latest article request pending.
    pub article: bool,
}

impl InFlight {
    /// Whether any fetch is pending.
    #[must_use]
    pub const fn any(self) -> bool {
        self.categories || self.category_news || self.article
    }
}

/// Application state mutated by the command handlers and read by the UI.
///
/// Exactly one owner (the event loop) holds this value. Background workers never
/// touch it; they send messages that the loop applies through the handlers.
#[derive(Debug)]
pub struct AppState {
    /// Categories in the order the API listed them.
    pub categories: Vec<Category>,
    /// Index into `categories` of the highlighted tab.
    pub active_category: Option<usize>,
    /// Category whose news currently populates `news`.
    pub loaded_category_id: Option<String>,
    /// Canonical news plus filter/sort selections.
    pub news: NewsSetState,
    /// Last computed displayed set.
    pub displayed: DisplayedNews,
    /// Index into `displayed` that is currently highlighted.
    pub selected: usize,
    /// List widget state mirroring `selected`.
    pub list_state: ListState,
    /// Active overlay.
    pub modal: Modal,
    /// Fetches issued and not yet answered; the loader shows while any is set.
    pub in_flight: InFlight,
    /// Last issued request id (shared counter for all tagged requests).
    pub last_request_id: u64,
    /// Id of the newest category-news request; older responses are dropped.
    pub latest_category_request_id: u64,
    /// Id of the newest article request; older responses are dropped.
    pub latest_article_request_id: u64,
    /// Category index to activate once the category list arrives.
    pub default_category: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            active_category: None,
            loaded_category_id: None,
            news: NewsSetState::default(),
            displayed: DisplayedNews::default(),
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
            in_flight: InFlight::default(),
            last_request_id: 0,
            latest_category_request_id: 0,
            latest_article_request_id: 0,
            default_category: 1,
        }
    }
}

impl AppState {
    /// What: Build a state with the configured initial selections.
    ///
    /// Inputs:
    /// - `status_filter`, `sort_order`: Initial selections from settings/CLI
    /// - `default_category`: Index of the category to open first
    #[must_use]
    pub fn new(
        status_filter: StatusFilter,
        sort_order: SortOrder,
        default_category: usize,
    ) -> Self {
        Self {
            news: NewsSetState::new(status_filter, sort_order),
            default_category,
            ..Self::default()
        }
    }

    /// Allocate the next monotonic request id.
    pub const fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// What: Recompute the displayed set from the canonical items.
    ///
    /// Output:
    /// - Replaces `displayed` and keeps the highlighted item selected when still present.
    pub fn recompute_displayed(&mut self) {
        let prev_id = self.selected_item().map(|it| it.id.clone());
        self.displayed = self.news.compute_displayed();
        crate::logic::restore_selection(self, prev_id.as_deref());
    }

    /// Whether the loader overlay should be drawn.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.any()
    }

    /// Category of the highlighted tab.
    #[must_use]
    pub fn active_category(&self) -> Option<&Category> {
        self.active_category.and_then(|i| self.categories.get(i))
    }

    /// Category whose news is currently loaded.
    #[must_use]
    pub fn loaded_category(&self) -> Option<&Category> {
        let id = self.loaded_category_id.as_deref()?;
        self.categories.iter().find(|c| c.category_id == id)
    }

    /// Item under the list highlight.
    #[must_use]
    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.displayed.items().get(self.selected)
    }

    /// What: Count line shown above the list.
    ///
    /// Output:
    /// - `"N items found for category X"` / `"No item found for category X"`, or the bare count
    ///   text while no category is loaded.
    #[must_use]
    pub fn count_line(&self) -> String {
        let count = self.displayed.count_text();
        match self.loaded_category() {
            Some(cat) => format!("{count} for category {}", cat.category_name),
            None => count,
        }
    }
}
