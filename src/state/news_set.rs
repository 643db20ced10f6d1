//! Filter/sort core over the news of the active category.

use crate::logic::{filter_by_status, sort_by_views};
use crate::state::{NewsItem, SortOrder, StatusFilter};

/// Canonical news of the active category plus the two independent selections
/// (status filter and view-count order) that derive the displayed set.
///
/// Fields are private: mutation only goes through the setters below, and the
/// canonical list is never reordered or filtered in place.
#[derive(Debug, Clone, Default)]
pub struct NewsSetState {
    /// Items in the order the source returned them.
    canonical_items: Vec<NewsItem>,
    /// Active status filter.
    status_filter: StatusFilter,
    /// Active view-count order.
    sort_order: SortOrder,
}

/// Owned snapshot of the displayed set produced by [`NewsSetState::compute_displayed`].
///
/// Holds its own copies of the items, so nothing done to a snapshot can reach the
/// canonical list it was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayedNews {
    /// Filtered and ordered items.
    items: Vec<NewsItem>,
}

impl DisplayedNews {
    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Number of items that passed the status filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing passed the status filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count text for the result line: `"N items found"` or `"No item found"`.
    #[must_use]
    pub fn count_text(&self) -> String {
        count_text(self.len())
    }

    /// Consume the snapshot and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<NewsItem> {
        self.items
    }
}

/// What: Render the item count shown above the list.
///
/// Inputs:
/// - `count`: Number of items after filtering
///
/// Output:
/// - `"{count} items found"` when at least one item matched, `"No item found"` otherwise.
#[must_use]
pub fn count_text(count: usize) -> String {
    if count >= 1 {
        format!("{count} items found")
    } else {
        "No item found".to_string()
    }
}

impl NewsSetState {
    /// Create an empty state with the given initial selections.
    #[must_use]
    pub const fn new(status_filter: StatusFilter, sort_order: SortOrder) -> Self {
        Self {
            canonical_items: Vec::new(),
            status_filter,
            sort_order,
        }
    }

    /// Replace the canonical items wholesale. Filter and order are left as they are.
    pub fn set_canonical_items(&mut self, items: Vec<NewsItem>) {
        self.canonical_items = items;
    }

    /// Replace the status filter. The sort order is not touched.
    pub const fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Replace the sort order. The status filter is not touched.
    pub const fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Canonical items as received from the source.
    #[must_use]
    pub fn canonical_items(&self) -> &[NewsItem] {
        &self.canonical_items
    }

    /// Active status filter.
    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Active sort order.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// What: Derive the displayed set from the canonical items.
    ///
    /// Output:
    /// - Owned snapshot: status filter applied (stable), then view-count order (stable).
    ///
    /// Details:
    /// - Always starts from the canonical items, never from an earlier snapshot.
    /// - Sorting does not change the count, so the snapshot length is the filtered size.
    #[must_use]
    pub fn compute_displayed(&self) -> DisplayedNews {
        let mut items = filter_by_status(&self.canonical_items, self.status_filter);
        sort_by_views(&mut items, self.sort_order);
        DisplayedNews { items }
    }
}
