//! Command-line listing of a category's news.

use std::time::Duration;

use headliner::sources::NewsClient;
use headliner::state::NewsSetState;
use headliner::theme::Settings;
use headliner::util::{author_label, published_label, rating_stars, views_label};

/// What: Print the news of the configured category and return.
///
/// Inputs:
/// - `settings`: Effective settings (API root, category index, filter, sort)
///
/// Output:
/// - `true` when the news was printed; `false` after printing an error.
///
/// Details:
/// - Runs the same filter/sort pipeline as the TUI on the fetched items.
pub async fn handle_list(settings: &Settings) -> bool {
    tracing::info!(category = settings.default_category, "list mode requested from CLI");
    let client = match NewsClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {e}");
            return false;
        }
    };

    let categories = match client.fetch_categories().await {
        Ok(c) if !c.is_empty() => c,
        Ok(_) => {
            eprintln!("Category not found!");
            return false;
        }
        Err(e) => {
            eprintln!("Category not found! {e}");
            tracing::error!(error = %e, "failed to fetch categories");
            return false;
        }
    };
    let index = settings.default_category.min(categories.len() - 1);
    let category = &categories[index];

    let items = match client.fetch_category_news(&category.category_id).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("News could not be found! {e}");
            tracing::error!(error = %e, category = %category.category_id, "failed to fetch news");
            return false;
        }
    };

    let mut news = NewsSetState::new(settings.status_filter, settings.sort_order);
    news.set_canonical_items(items);
    let displayed = news.compute_displayed();

    println!(
        "{} for category {}",
        displayed.count_text(),
        category.category_name
    );
    println!();
    for item in displayed.items() {
        println!("{}", item.title);
        println!(
            "  {} | {} | {} | {}",
            author_label(item),
            published_label(item),
            views_label(item),
            rating_stars(item.rating.as_ref())
        );
        println!();
    }
    tracing::info!(count = displayed.len(), "displayed news items");
    true
}
