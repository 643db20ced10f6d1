//! Shared fixtures for unit tests across modules.

#[cfg(test)]
use crate::state::{AppState, Category, NewsItem, OthersInfo};

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}

#[cfg(test)]
/// What: Provide an `AppState` whose category list is already loaded.
///
/// Output: State with categories "01 Breaking News", "02 Regular News", "05 Entertainment"
pub fn app_with_categories() -> AppState {
    let mut app = AppState::default();
    app.categories = vec![
        category("01", "Breaking News"),
        category("02", "Regular News"),
        category("05", "Entertainment"),
    ];
    app
}

#[cfg(test)]
/// Build a category.
pub fn category(id: &str, name: &str) -> Category {
    Category {
        category_id: id.to_string(),
        category_name: name.to_string(),
    }
}

#[cfg(test)]
/// Build a news item with the fields the filter/sort pipeline inspects.
pub fn news(id: &str, views: Option<u64>, pick: bool, trending: bool) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: format!("Title {id}"),
        details: format!("Details of {id}"),
        total_view: views,
        others_info: OthersInfo {
            is_todays_pick: pick,
            is_trending: trending,
        },
        ..Default::default()
    }
}
