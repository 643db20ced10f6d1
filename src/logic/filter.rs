use crate::state::{NewsItem, StatusFilter};

/// What: Check whether a single item passes the status filter.
///
/// Inputs:
/// - `item`: Candidate news item
/// - `filter`: Active status filter
///
/// Output:
/// - `true` when the item should be kept.
#[must_use]
pub const fn matches_status(item: &NewsItem, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::None => true,
        StatusFilter::TodaysPick => item.is_todays_pick(),
        StatusFilter::Trending => item.is_trending(),
    }
}

/// What: Copy the items that pass `filter` into a new vector.
///
/// Inputs:
/// - `items`: Canonical items, never modified
/// - `filter`: Active status filter
///
/// Output:
/// - New vector holding the kept items in their original relative order.
#[must_use]
pub fn filter_by_status(items: &[NewsItem], filter: StatusFilter) -> Vec<NewsItem> {
    items
        .iter()
        .filter(|it| matches_status(it, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OthersInfo;

    fn item(id: &str, pick: bool, trending: bool) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            others_info: OthersInfo {
                is_todays_pick: pick,
                is_trending: trending,
            },
            ..Default::default()
        }
    }

    #[test]
    /// What: Each status filter keeps only its flagged items in original order
    ///
    /// - Input: Four items with mixed pick/trending flags
    /// - Output: None keeps all; TodaysPick and Trending keep their subsets in order
    fn filter_status_subsets_preserve_order() {
        let items = vec![
            item("a", true, false),
            item("b", false, true),
            item("c", true, true),
            item("d", false, false),
        ];
        let ids = |v: Vec<NewsItem>| v.into_iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(
            ids(filter_by_status(&items, StatusFilter::None)),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(
            ids(filter_by_status(&items, StatusFilter::TodaysPick)),
            vec!["a", "c"]
        );
        assert_eq!(
            ids(filter_by_status(&items, StatusFilter::Trending)),
            vec!["b", "c"]
        );
        assert_eq!(items.len(), 4);
    }

    #[test]
    /// What: Filtering an empty slice yields an empty vector for every filter
    ///
    /// - Input: Empty slice
    /// - Output: Empty result, no panic
    fn filter_empty_input() {
        for f in StatusFilter::ALL {
            assert!(filter_by_status(&[], f).is_empty());
        }
    }
}
