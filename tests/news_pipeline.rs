//! Integration tests for the filter/sort pipeline through the public library API.

use headliner::state::{NewsItem, NewsSetState, OthersInfo, SortOrder, StatusFilter, count_text};

fn item(id: &str, views: Option<u64>, pick: bool, trending: bool) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: format!("Title {id}"),
        total_view: views,
        others_info: OthersInfo {
            is_todays_pick: pick,
            is_trending: trending,
        },
        ..Default::default()
    }
}

fn ids(state: &NewsSetState) -> Vec<String> {
    state
        .compute_displayed()
        .items()
        .iter()
        .map(|i| i.id.clone())
        .collect()
}

/// Canonical set shared by the walkthrough tests: A(5), B(null), C(12, trending), D(5, pick).
fn canonical() -> Vec<NewsItem> {
    vec![
        item("A", Some(5), false, false),
        item("B", None, false, false),
        item("C", Some(12), false, true),
        item("D", Some(5), true, false),
    ]
}

#[test]
/// What: Walk the whole filter x sort grid on one canonical set
///
/// - Input: Four items with ties and a missing view count
/// - Output: Every cell yields the expected ids; ties keep arrival order
fn pipeline_full_grid() {
    let mut state = NewsSetState::default();
    state.set_canonical_items(canonical());

    let expected: [(StatusFilter, SortOrder, &[&str]); 9] = [
        (StatusFilter::None, SortOrder::Default, &["A", "B", "C", "D"]),
        (StatusFilter::None, SortOrder::HighestFirst, &["C", "A", "D", "B"]),
        (StatusFilter::None, SortOrder::LowestFirst, &["B", "A", "D", "C"]),
        (StatusFilter::TodaysPick, SortOrder::Default, &["D"]),
        (StatusFilter::TodaysPick, SortOrder::HighestFirst, &["D"]),
        (StatusFilter::TodaysPick, SortOrder::LowestFirst, &["D"]),
        (StatusFilter::Trending, SortOrder::Default, &["C"]),
        (StatusFilter::Trending, SortOrder::HighestFirst, &["C"]),
        (StatusFilter::Trending, SortOrder::LowestFirst, &["C"]),
    ];
    for (filter, order, want) in expected {
        state.set_status_filter(filter);
        state.set_sort_order(order);
        assert_eq!(ids(&state), want, "{filter:?} x {order:?}");
    }
}

#[test]
/// What: Returning to (None, Default) restores the arrival order exactly
///
/// - Input: Sort high, filter trending, then reset both
/// - Output: Original order A, B, C, D
fn pipeline_reset_restores_arrival_order() {
    let mut state = NewsSetState::new(StatusFilter::None, SortOrder::Default);
    state.set_canonical_items(canonical());
    state.set_sort_order(SortOrder::HighestFirst);
    state.set_status_filter(StatusFilter::Trending);
    state.set_status_filter(StatusFilter::None);
    state.set_sort_order(SortOrder::Default);
    assert_eq!(ids(&state), vec!["A", "B", "C", "D"]);
    assert_eq!(state.canonical_items().len(), 4);
}

#[test]
/// What: A new canonical set keeps both selections
///
/// - Input: Trending + `LowestFirst`, then a different category's items
/// - Output: New items filtered to trending and ordered ascending
fn pipeline_reload_keeps_selections() {
    let mut state = NewsSetState::new(StatusFilter::Trending, SortOrder::LowestFirst);
    state.set_canonical_items(canonical());
    state.set_canonical_items(vec![
        item("x", Some(40), false, true),
        item("y", Some(2), false, false),
        item("z", Some(9), true, true),
    ]);
    assert_eq!(state.status_filter(), StatusFilter::Trending);
    assert_eq!(state.sort_order(), SortOrder::LowestFirst);
    assert_eq!(ids(&state), vec!["z", "x"]);
}

#[test]
/// What: Count text follows the displayed cardinality
///
/// - Input: Filter with zero matches; full set
/// - Output: "No item found"; "4 items found"
fn pipeline_count_text() {
    let mut state = NewsSetState::default();
    state.set_canonical_items(vec![item("A", Some(1), false, false)]);
    state.set_status_filter(StatusFilter::Trending);
    let displayed = state.compute_displayed();
    assert!(displayed.is_empty());
    assert_eq!(displayed.count_text(), "No item found");

    state.set_canonical_items(canonical());
    state.set_status_filter(StatusFilter::None);
    assert_eq!(state.compute_displayed().count_text(), "4 items found");
    assert_eq!(count_text(0), "No item found");
}
