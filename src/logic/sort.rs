use crate::state::{NewsItem, SortOrder};

/// What: Order `items` by view count in place according to `order`.
///
/// Inputs:
/// - `items`: Filtered working copy (never the canonical list)
/// - `order`: Active sort order
///
/// Output:
/// - Reorders `items`; `SortOrder::Default` leaves it untouched.
///
/// Details:
/// - Uses the stable `sort_by_key`, so items with equal views keep their relative order.
/// - Missing view counts compare as zero.
pub fn sort_by_views(items: &mut [NewsItem], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::HighestFirst => {
            items.sort_by_key(|it| std::cmp::Reverse(it.views()));
        }
        SortOrder::LowestFirst => {
            items.sort_by_key(NewsItem::views);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, views: Option<u64>) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            total_view: views,
            ..Default::default()
        }
    }

    fn ids(items: &[NewsItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    /// What: Descending and ascending sorts keep tied items in input order
    ///
    /// - Input: Views [5, 9, 5, 1] with ids a..d
    /// - Output: Highest = b, a, c, d; Lowest = d, a, c, b
    fn sort_views_is_stable_both_directions() {
        let base = vec![
            item("a", Some(5)),
            item("b", Some(9)),
            item("c", Some(5)),
            item("d", Some(1)),
        ];
        let mut hi = base.clone();
        sort_by_views(&mut hi, SortOrder::HighestFirst);
        assert_eq!(ids(&hi), vec!["b", "a", "c", "d"]);

        let mut lo = base.clone();
        sort_by_views(&mut lo, SortOrder::LowestFirst);
        assert_eq!(ids(&lo), vec!["d", "a", "c", "b"]);

        let mut same = base.clone();
        sort_by_views(&mut same, SortOrder::Default);
        assert_eq!(same, base);
    }

    #[test]
    /// What: Missing view counts sort exactly like zero
    ///
    /// - Input: Items with None, Some(0), Some(3)
    /// - Output: None and 0 keep input order among themselves at the low end
    fn sort_missing_views_as_zero() {
        let mut items = vec![item("x", Some(3)), item("none", None), item("zero", Some(0))];
        sort_by_views(&mut items, SortOrder::LowestFirst);
        assert_eq!(ids(&items), vec!["none", "zero", "x"]);
        sort_by_views(&mut items, SortOrder::HighestFirst);
        assert_eq!(ids(&items), vec!["x", "none", "zero"]);
    }
}
