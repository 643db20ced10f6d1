//! Apply worker responses to `AppState`.
//!
//! Responses tagged with a request id older than the newest one issued for the
//! same boundary are dropped without touching state.

use crate::app::commands::{RequestSenders, select_category};
use crate::state::{
    AppState, ArticleDetails, Category, CategoryNews, DisplayedNews, FetchFailure, FetchKind, Modal,
};

/// What: Install the fetched category list and open the default category.
///
/// Inputs:
/// - `app`: Application state
/// - `categories`: Categories in API order
/// - `senders`: Worker request channels
///
/// Details:
/// - The configured default index is clamped to the last category.
/// - An empty list raises the category alert.
pub fn handle_categories(app: &mut AppState, categories: Vec<Category>, senders: &RequestSenders) {
    app.in_flight.categories = false;
    if categories.is_empty() {
        tracing::warn!("category list is empty");
        app.modal = Modal::Alert {
            title: FetchKind::Categories.user_message().to_string(),
            message: "The news service returned no categories.".to_string(),
        };
        return;
    }
    let index = app
        .active_category
        .unwrap_or(app.default_category)
        .min(categories.len() - 1);
    tracing::info!(count = categories.len(), index, "categories loaded");
    app.categories = categories;
    select_category(app, index, senders);
}

/// What: Replace the canonical items with a category's news.
///
/// Inputs:
/// - `app`: Application state
/// - `news`: Tagged category news
///
/// Details:
/// - Only the newest category request is applied.
/// - Switching to another category moves the highlight back to the top.
pub fn handle_category_news(app: &mut AppState, news: CategoryNews) {
    if news.id != app.latest_category_request_id {
        tracing::debug!(
            request_id = news.id,
            latest = app.latest_category_request_id,
            "dropping stale category news"
        );
        return;
    }
    app.in_flight.category_news = false;
    if app.loaded_category_id.as_deref() != Some(news.category_id.as_str()) {
        // Drop the old snapshot so no highlighted id carries over.
        app.displayed = DisplayedNews::default();
        app.selected = 0;
    }
    tracing::info!(
        category = %news.category_id,
        count = news.items.len(),
        "category news applied"
    );
    app.loaded_category_id = Some(news.category_id);
    app.news.set_canonical_items(news.items);
    app.recompute_displayed();
}

/// What: Open the detail overlay for a fetched article.
///
/// Inputs:
/// - `app`: Application state
/// - `details`: Tagged article
pub fn handle_article(app: &mut AppState, details: ArticleDetails) {
    if details.id != app.latest_article_request_id {
        tracing::debug!(
            request_id = details.id,
            latest = app.latest_article_request_id,
            "dropping stale article"
        );
        return;
    }
    app.in_flight.article = false;
    app.modal = Modal::Details {
        item: Box::new(details.item),
        scroll: 0,
    };
}

/// What: Surface a fetch failure as an alert.
///
/// Inputs:
/// - `app`: Application state
/// - `failure`: Failure reported by a worker
///
/// Details:
/// - Core state is left unchanged; only the loader flag and the modal move.
/// - Failures of superseded requests are dropped like stale responses.
pub fn handle_fetch_failure(app: &mut AppState, failure: FetchFailure) {
    let latest = match failure.kind {
        FetchKind::Categories => None,
        FetchKind::CategoryNews => Some(app.latest_category_request_id),
        FetchKind::Article => Some(app.latest_article_request_id),
    };
    if let Some(latest) = latest
        && failure.request_id != latest
    {
        tracing::debug!(
            request_id = failure.request_id,
            latest,
            kind = ?failure.kind,
            "dropping stale failure"
        );
        return;
    }
    match failure.kind {
        FetchKind::Categories => app.in_flight.categories = false,
        FetchKind::CategoryNews => app.in_flight.category_news = false,
        FetchKind::Article => app.in_flight.article = false,
    }
    tracing::error!(kind = ?failure.kind, error = %failure.message, "fetch failed");
    app.modal = Modal::Alert {
        title: failure.kind.user_message().to_string(),
        message: failure.message,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{app_with_categories, category, new_app, news};
    use tokio::sync::mpsc;

    fn senders() -> (
        RequestSenders,
        mpsc::UnboundedReceiver<crate::state::CategoryRequest>,
    ) {
        let (categories_tx, _) = mpsc::unbounded_channel();
        let (news_tx, news_rx) = mpsc::unbounded_channel();
        let (article_tx, _) = mpsc::unbounded_channel();
        (
            RequestSenders {
                categories_tx,
                news_tx,
                article_tx,
            },
            news_rx,
        )
    }

    #[test]
    /// What: Category list opens the default category, clamped to the list
    ///
    /// - Input: Default index 1 with three categories; default 9 with two
    /// - Output: Request for "02"; then request for the last category
    fn handlers_categories_open_default() {
        let (tx, mut rx) = senders();
        let mut app = new_app();
        app.in_flight.categories = true;
        handle_categories(
            &mut app,
            vec![
                category("01", "Breaking News"),
                category("02", "Regular News"),
                category("05", "Entertainment"),
            ],
            &tx,
        );
        assert!(!app.in_flight.categories);
        assert_eq!(app.active_category, Some(1));
        assert_eq!(rx.try_recv().expect("request").category_id, "02");

        let mut app = new_app();
        app.default_category = 9;
        handle_categories(
            &mut app,
            vec![category("01", "A"), category("02", "B")],
            &tx,
        );
        assert_eq!(app.active_category, Some(1));
    }

    #[test]
    /// What: Empty category list raises the category alert
    ///
    /// - Input: `vec![]`
    /// - Output: Alert titled "Category not found!"; no active category
    fn handlers_categories_empty_alerts() {
        let (tx, _rx) = senders();
        let mut app = new_app();
        handle_categories(&mut app, Vec::new(), &tx);
        assert!(matches!(
            app.modal,
            Modal::Alert { ref title, .. } if title == "Category not found!"
        ));
        assert_eq!(app.active_category, None);
    }

    #[test]
    /// What: Only the newest category response replaces canonical items
    ///
    /// - Input: Requests 1 and 2 issued; response 2 then late response 1
    /// - Output: Items of response 2 remain; loader cleared
    fn handlers_category_news_drops_stale() {
        let mut app = app_with_categories();
        app.latest_category_request_id = 2;
        app.in_flight.category_news = true;

        handle_category_news(
            &mut app,
            CategoryNews {
                id: 2,
                category_id: "05".into(),
                items: vec![news("new", Some(1), false, false)],
            },
        );
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 1,
                category_id: "01".into(),
                items: vec![news("old", Some(1), false, false)],
            },
        );
        assert!(!app.is_loading());
        assert_eq!(app.loaded_category_id.as_deref(), Some("05"));
        assert_eq!(app.displayed.items()[0].id, "new");
        assert_eq!(app.count_line(), "1 items found for category Entertainment");
    }

    #[test]
    /// What: New category news respects the current filter and sort
    ///
    /// - Input: Trending + `HighestFirst`; response with three items
    /// - Output: Trending items ordered by views
    fn handlers_category_news_keeps_selections() {
        let mut app = app_with_categories();
        app.news.set_status_filter(crate::state::StatusFilter::Trending);
        app.news.set_sort_order(crate::state::SortOrder::HighestFirst);
        app.latest_category_request_id = 1;
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 1,
                category_id: "01".into(),
                items: vec![
                    news("a", Some(3), false, true),
                    news("b", Some(9), true, false),
                    news("c", Some(7), false, true),
                ],
            },
        );
        let ids: Vec<&str> = app.displayed.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    /// What: Switching category puts the highlight on the first row
    ///
    /// - Input: "shared" highlighted in category 01; category 05 returns ["x", "shared"]
    /// - Output: Row 0 ("x") is highlighted, not the carried-over "shared"
    fn handlers_category_switch_resets_highlight() {
        let mut app = app_with_categories();
        app.latest_category_request_id = 1;
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 1,
                category_id: "01".into(),
                items: vec![
                    news("shared", Some(1), false, false),
                    news("other", Some(2), false, false),
                ],
            },
        );
        assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("shared"));

        app.latest_category_request_id = 2;
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 2,
                category_id: "05".into(),
                items: vec![
                    news("x", Some(3), false, false),
                    news("shared", Some(1), false, false),
                ],
            },
        );
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("x"));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Same-category reload keeps the highlighted item
    ///
    /// - Input: "b" highlighted in 01; reload of 01 returns ["new", "a", "b"]
    /// - Output: "b" stays highlighted at its new index
    fn handlers_category_reload_keeps_highlight() {
        let mut app = app_with_categories();
        app.latest_category_request_id = 1;
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 1,
                category_id: "01".into(),
                items: vec![news("a", Some(1), false, false), news("b", Some(2), false, false)],
            },
        );
        crate::logic::move_selection(&mut app, 1);
        app.latest_category_request_id = 2;
        handle_category_news(
            &mut app,
            CategoryNews {
                id: 2,
                category_id: "01".into(),
                items: vec![
                    news("new", Some(5), false, false),
                    news("a", Some(1), false, false),
                    news("b", Some(2), false, false),
                ],
            },
        );
        assert_eq!(app.selected, 2);
        assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    /// What: Article response opens details only for the newest request
    ///
    /// - Input: Stale id then current id
    /// - Output: No modal after stale; details modal after current
    fn handlers_article_opens_details() {
        let mut app = app_with_categories();
        app.latest_article_request_id = 4;
        app.in_flight.article = true;
        handle_article(
            &mut app,
            ArticleDetails {
                id: 3,
                item: news("x", None, false, false),
            },
        );
        assert!(!app.modal.is_open());
        assert!(app.in_flight.article);
        handle_article(
            &mut app,
            ArticleDetails {
                id: 4,
                item: news("y", None, false, false),
            },
        );
        assert!(matches!(app.modal, Modal::Details { ref item, scroll: 0 } if item.id == "y"));
        assert!(!app.is_loading());
    }

    #[test]
    /// What: Failures alert, clear the loader and keep core state
    ///
    /// - Input: Loaded items; current news failure; stale article failure
    /// - Output: Alert "News could not be found!"; items unchanged; stale ignored
    fn handlers_failure_keeps_state() {
        let mut app = app_with_categories();
        app.news.set_canonical_items(vec![news("keep", Some(1), false, false)]);
        app.recompute_displayed();
        app.latest_category_request_id = 7;
        app.latest_article_request_id = 8;
        app.in_flight.category_news = true;
        app.in_flight.article = true;

        handle_fetch_failure(
            &mut app,
            FetchFailure {
                request_id: 5,
                kind: FetchKind::Article,
                message: "late".into(),
            },
        );
        assert!(app.in_flight.article);
        assert!(!app.modal.is_open());

        handle_fetch_failure(
            &mut app,
            FetchFailure {
                request_id: 7,
                kind: FetchKind::CategoryNews,
                message: "HTTP 500".into(),
            },
        );
        assert!(!app.in_flight.category_news);
        assert!(app.in_flight.article);
        assert!(matches!(
            app.modal,
            Modal::Alert { ref title, ref message }
                if title == "News could not be found!" && message == "HTTP 500"
        ));
        assert_eq!(app.news.canonical_items().len(), 1);
        assert_eq!(app.displayed.items()[0].id, "keep");
    }
}
