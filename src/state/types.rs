//! Core value types used by headliner state.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field that the API may send as `null`, mapping `null` to the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// News category as listed by the category endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque category identifier used in the news-by-category URL.
    pub category_id: String,
    /// Human readable category name shown in the header tabs.
    pub category_name: String,
}

/// Author block attached to each article. Every field may be missing or null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Display name of the author.
    #[serde(default)]
    pub name: Option<String>,
    /// Publish timestamp as sent by the API (e.g., `2022-08-24 17:27:34`).
    #[serde(default)]
    pub published_date: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub img: Option<String>,
}

/// Article rating.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating value on a 0 to 5 scale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: f64,
    /// Badge label (e.g., "Excellent").
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
}

/// Status flags of an article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OthersInfo {
    /// Marked as one of today's picks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_todays_pick: bool,
    /// Marked as trending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_trending: bool,
}

/// One news article as returned by the category and article endpoints.
///
/// Only `id`, `total_view` and `others_info` drive the filter/sort pipeline;
/// the remaining fields are carried through for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique article identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Identifier of the category this article belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: String,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Full body text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
    /// Header image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Author block.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
    /// View count in thousands; `None` when the API sends null or omits it.
    #[serde(default)]
    pub total_view: Option<u64>,
    /// Optional rating.
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Status flags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub others_info: OthersInfo,
}

impl NewsItem {
    /// View count used for ordering; a missing count sorts as zero.
    #[must_use]
    pub fn views(&self) -> u64 {
        self.total_view.unwrap_or(0)
    }

    /// Whether the article is flagged as one of today's picks.
    #[must_use]
    pub const fn is_todays_pick(&self) -> bool {
        self.others_info.is_todays_pick
    }

    /// Whether the article is flagged as trending.
    #[must_use]
    pub const fn is_trending(&self) -> bool {
        self.others_info.is_trending
    }
}

/// Status filter applied to the canonical items before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No narrowing: every item passes.
    #[default]
    None,
    /// Only items flagged as today's pick.
    TodaysPick,
    /// Only items flagged as trending.
    Trending,
}

impl StatusFilter {
    /// All filters in button order.
    pub const ALL: [Self; 3] = [Self::None, Self::TodaysPick, Self::Trending];

    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::None => "all",
            Self::TodaysPick => "todays_pick",
            Self::Trending => "trending",
        }
    }

    /// Parse a filter from its settings key or aliases (case-insensitive).
    ///
    /// Output: `Some(StatusFilter)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" | "none" => Some(Self::None),
            "todays_pick" | "todayspick" | "pick" => Some(Self::TodaysPick),
            "trending" => Some(Self::Trending),
            _ => None,
        }
    }

    /// Label shown on the filter button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "All",
            Self::TodaysPick => "Today's Pick",
            Self::Trending => "Trending",
        }
    }
}

/// Ordering applied to the filtered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the items arrived in.
    #[default]
    Default,
    /// Most viewed first.
    HighestFirst,
    /// Least viewed first.
    LowestFirst,
}

impl SortOrder {
    /// All orders in dropdown order.
    pub const ALL: [Self; 3] = [Self::Default, Self::HighestFirst, Self::LowestFirst];

    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::HighestFirst => "highest_first",
            Self::LowestFirst => "lowest_first",
        }
    }

    /// Parse an order from its settings key or legacy aliases (case-insensitive).
    ///
    /// Output: `Some(SortOrder)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "default" | "none" => Some(Self::Default),
            "highest_first" | "higherfirst" | "desc" => Some(Self::HighestFirst),
            "lowest_first" | "lowerfirst" | "asc" => Some(Self::LowestFirst),
            _ => None,
        }
    }

    /// Next order in the cycle used by the sort shortcut.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Default => Self::HighestFirst,
            Self::HighestFirst => Self::LowestFirst,
            Self::LowestFirst => Self::Default,
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::HighestFirst => "Highest views first",
            Self::LowestFirst => "Lowest views first",
        }
    }
}

/// Request for the news of one category, tagged for stale-response detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Category to load.
    pub category_id: String,
}

/// News returned for a prior [`CategoryRequest`].
#[derive(Clone, Debug)]
pub struct CategoryNews {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed category identifier.
    pub category_id: String,
    /// Items in the order the API returned them.
    pub items: Vec<NewsItem>,
}

/// Request for a single article's full details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Article to load.
    pub news_id: String,
}

/// Article returned for a prior [`ArticleRequest`].
#[derive(Clone, Debug)]
pub struct ArticleDetails {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// The article.
    pub item: NewsItem,
}

/// Which fetch boundary a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Category list.
    Categories,
    /// News of one category.
    CategoryNews,
    /// Single article details.
    Article,
}

impl FetchKind {
    /// Headline shown in the alert for a failure at this boundary.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Categories => "Category not found!",
            Self::CategoryNews => "News could not be found!",
            Self::Article => "News details not found!",
        }
    }
}

/// Failure reported by a background fetch worker.
#[derive(Clone, Debug)]
pub struct FetchFailure {
    /// Identifier of the failed request (0 for the category list).
    pub request_id: u64,
    /// Boundary that failed.
    pub kind: FetchKind,
    /// Error detail for the alert body and logs.
    pub message: String,
}
