//! News API retrieval split into the HTTP client and response decoding.

mod client;
mod parse;

/// Failure at the news API boundary.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Transport failure (connect, timeout, TLS, body read).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// Body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Article endpoint returned no article.
    #[error("no article with id {0}")]
    NotFound(String),
}

/// Result type alias for news API operations.
pub type Result<T> = std::result::Result<T, SourceError>;

pub use client::NewsClient;
pub use parse::{parse_article, parse_categories, parse_category_news};
