//! Modularized state module.
//!
//! Value types, the filter/sort core, modal state and the central `AppState`
//! live in separate files and are re-exported under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod news_set;
pub mod types;

// Public re-exports to keep existing paths working
pub use app_state::{AppState, InFlight};
pub use modal::Modal;
pub use news_set::{DisplayedNews, NewsSetState, count_text};
pub use types::{
    ArticleDetails, ArticleRequest, Author, Category, CategoryNews, CategoryRequest, FetchFailure,
    FetchKind, NewsItem, OthersInfo, Rating, SortOrder, StatusFilter,
};
