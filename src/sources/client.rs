//! HTTP client for the news API.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::parse::{parse_article, parse_categories, parse_category_news};
use super::{Result, SourceError};
use crate::state::{Category, NewsItem};
use crate::util::percent_encode;

/// Client bound to one API root.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool between clones.
#[derive(Clone, Debug)]
pub struct NewsClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// API root without trailing slash.
    base_url: String,
}

impl NewsClient {
    /// What: Build a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: API root, e.g. `https://openapi.programming-hero.com/api/news`
    /// - `timeout`: Total per-request timeout
    ///
    /// # Errors
    /// - `SourceError::Http` when the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .user_agent(format!("headliner/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the category list.
    #[must_use]
    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.base_url)
    }

    /// URL of the news of one category.
    #[must_use]
    pub fn category_news_url(&self, category_id: &str) -> String {
        format!("{}/category/{}", self.base_url, percent_encode(category_id))
    }

    /// URL of one article.
    #[must_use]
    pub fn article_url(&self, news_id: &str) -> String {
        format!("{}/{}", self.base_url, percent_encode(news_id))
    }

    /// What: GET `url` and return the body text.
    ///
    /// # Errors
    /// - `SourceError::Http` on transport failures.
    /// - `SourceError::Status` on non-success HTTP status.
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url = %url, "GET");
        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "request failed");
            SourceError::Http(e)
        })?;
        let status = resp.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }

    /// What: Fetch the category list.
    ///
    /// # Errors
    /// - Transport, status or decode failures (see [`SourceError`]).
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let body = self.get_text(&self.categories_url()).await?;
        let cats = parse_categories(&body)?;
        info!(count = cats.len(), "fetched categories");
        Ok(cats)
    }

    /// What: Fetch the news of one category in API order.
    ///
    /// # Errors
    /// - Transport, status or decode failures (see [`SourceError`]).
    pub async fn fetch_category_news(&self, category_id: &str) -> Result<Vec<NewsItem>> {
        let body = self.get_text(&self.category_news_url(category_id)).await?;
        let items = parse_category_news(&body)?;
        info!(category = %category_id, count = items.len(), "fetched category news");
        Ok(items)
    }

    /// What: Fetch one article with full details.
    ///
    /// # Errors
    /// - Transport, status or decode failures, or `SourceError::NotFound` for an empty result.
    pub async fn fetch_article(&self, news_id: &str) -> Result<NewsItem> {
        let body = self.get_text(&self.article_url(news_id)).await?;
        let item = parse_article(&body, news_id)?;
        info!(news_id = %news_id, "fetched article");
        Ok(item)
    }
}
