//! Command-line argument definition and settings overrides.

use clap::Parser;
use headliner::state::{SortOrder, StatusFilter};
use headliner::theme::Settings;

/// Headliner - browse news by category in the terminal
#[derive(Parser, Debug)]
#[command(name = "headliner")]
#[command(version)]
#[command(about = "Browse news by category in the terminal", long_about = None)]
pub struct Args {
    /// Root URL of the news API (overrides `api_base_url` in settings.conf)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Index of the category opened on startup (overrides `default_category`)
    #[arg(short, long)]
    pub category: Option<usize>,

    /// Initial status filter: all, todays_pick or trending
    #[arg(short, long, value_parser = parse_filter)]
    pub filter: Option<StatusFilter>,

    /// Initial sort order: default, highest_first or lowest_first
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOrder>,

    /// Print the category's news to stdout instead of starting the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a `--filter` value.
fn parse_filter(s: &str) -> Result<StatusFilter, String> {
    StatusFilter::from_config_key(s)
        .ok_or_else(|| format!("unknown filter '{s}' (expected all, todays_pick or trending)"))
}

/// Parse a `--sort` value.
fn parse_sort(s: &str) -> Result<SortOrder, String> {
    SortOrder::from_config_key(s).ok_or_else(|| {
        format!("unknown sort order '{s}' (expected default, highest_first or lowest_first)")
    })
}

/// What: Apply command-line overrides on top of the file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
///
/// Output:
/// - Effective settings for this run.
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(base) = args.api_base.as_deref() {
        settings.api_base_url = base.trim_end_matches('/').to_string();
    }
    if let Some(index) = args.category {
        settings.default_category = index;
    }
    if let Some(filter) = args.filter {
        settings.status_filter = filter;
    }
    if let Some(order) = args.sort {
        settings.sort_order = order;
    }
    tracing::debug!(settings = ?settings, "effective settings");
    settings
}
