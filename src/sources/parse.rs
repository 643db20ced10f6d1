//! Response envelopes of the news API and their decoding.

use serde::Deserialize;

use super::{Result, SourceError};
use crate::state::{Category, NewsItem};

/// Common `{ status, message, data }` wrapper of every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    /// `false` when the API found nothing; data is then usually empty.
    #[serde(default)]
    status: bool,
    /// Optional human readable note (e.g., "no news found").
    #[serde(default)]
    message: Option<String>,
    /// Endpoint payload.
    data: T,
}

/// Payload of the categories endpoint.
#[derive(Debug, Deserialize)]
struct CategoryData {
    /// Categories in navigation order.
    news_category: Vec<Category>,
}

/// What: Decode the category list response.
///
/// Output:
/// - Categories in API order (possibly empty).
///
/// # Errors
/// - `SourceError::Decode` when the body is not a valid category envelope.
pub fn parse_categories(body: &str) -> Result<Vec<Category>> {
    let env: Envelope<CategoryData> = serde_json::from_str(body)?;
    tracing::debug!(
        status = env.status,
        count = env.data.news_category.len(),
        "decoded categories"
    );
    Ok(env.data.news_category)
}

/// What: Decode the news-by-category response.
///
/// Output:
/// - Items in API order. `"status": false` with empty data is an empty list, not an error.
///
/// # Errors
/// - `SourceError::Decode` when the body is not a valid news envelope.
pub fn parse_category_news(body: &str) -> Result<Vec<NewsItem>> {
    let env: Envelope<Vec<NewsItem>> = serde_json::from_str(body)?;
    if !env.status {
        tracing::debug!(
            message = env.message.as_deref().unwrap_or(""),
            count = env.data.len(),
            "category news reported status=false"
        );
    }
    Ok(env.data)
}

/// What: Decode the single-article response.
///
/// Output:
/// - The first article of the `data` array.
///
/// # Errors
/// - `SourceError::Decode` when the body is not a valid news envelope.
/// - `SourceError::NotFound` when `data` is empty.
pub fn parse_article(body: &str, news_id: &str) -> Result<NewsItem> {
    let env: Envelope<Vec<NewsItem>> = serde_json::from_str(body)?;
    env.data
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::NotFound(news_id.to_string()))
}
