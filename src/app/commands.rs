//! Typed user commands and the handlers that apply them to [`AppState`].
//!
//! Input bindings translate raw events into a [`Command`]; every state change made on
//! behalf of the user goes through [`apply_command`].

use tokio::sync::mpsc;

use crate::state::{AppState, ArticleRequest, CategoryRequest, Modal, SortOrder, StatusFilter};

/// A user intent, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate the category at this index and load its news.
    SelectCategory(usize),
    /// Activate the next category (wraps).
    NextCategory,
    /// Activate the previous category (wraps).
    PrevCategory,
    /// Re-issue the fetch for the active category (or the category list if none loaded).
    /// Dismisses an open alert.
    Reload,
    /// Replace the status filter.
    SetStatusFilter(StatusFilter),
    /// Replace the sort order.
    SetSortOrder(SortOrder),
    /// Advance to the next sort order.
    CycleSortOrder,
    /// Move the list highlight by this many rows.
    MoveSelection(isize),
    /// Load the highlighted article and open the detail overlay.
    OpenDetails,
    /// Scroll the detail overlay body by this many lines.
    ScrollDetails(i16),
    /// Close the active overlay.
    CloseModal,
    /// Open the key binding overview.
    ShowHelp,
    /// Leave the application.
    Quit,
}

/// Senders into the fetch workers.
#[derive(Clone, Debug)]
pub struct RequestSenders {
    /// Category list requests.
    pub categories_tx: mpsc::UnboundedSender<()>,
    /// Category news requests.
    pub news_tx: mpsc::UnboundedSender<CategoryRequest>,
    /// Article requests.
    pub article_tx: mpsc::UnboundedSender<ArticleRequest>,
}

/// What: Apply one command to the application state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `cmd`: Command to apply
/// - `senders`: Worker request channels for commands that fetch
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Filter and sort commands change exactly one axis, then recompute the displayed set once.
/// - Fetching commands allocate a fresh request id so older responses are ignored.
pub fn apply_command(app: &mut AppState, cmd: Command, senders: &RequestSenders) -> bool {
    tracing::debug!(command = ?cmd, "apply command");
    match cmd {
        Command::SelectCategory(index) => select_category(app, index, senders),
        Command::NextCategory => {
            if let Some(i) = wrapped_category(app, 1) {
                select_category(app, i, senders);
            }
        }
        Command::PrevCategory => {
            if let Some(i) = wrapped_category(app, -1) {
                select_category(app, i, senders);
            }
        }
        Command::Reload => {
            if matches!(app.modal, Modal::Alert { .. }) {
                app.modal = Modal::None;
            }
            match app.active_category {
                Some(i) => select_category(app, i, senders),
                None => request_categories(app, senders),
            }
        }
        Command::SetStatusFilter(filter) => {
            app.news.set_status_filter(filter);
            app.recompute_displayed();
        }
        Command::SetSortOrder(order) => {
            app.news.set_sort_order(order);
            app.recompute_displayed();
        }
        Command::CycleSortOrder => {
            app.news.set_sort_order(app.news.sort_order().next());
            app.recompute_displayed();
        }
        Command::MoveSelection(delta) => crate::logic::move_selection(app, delta),
        Command::OpenDetails => request_article(app, senders),
        Command::ScrollDetails(delta) => {
            if let Modal::Details { scroll, .. } = &mut app.modal {
                *scroll = scroll.saturating_add_signed(delta);
            }
        }
        Command::CloseModal => app.modal = Modal::None,
        Command::ShowHelp => app.modal = Modal::Help,
        Command::Quit => return true,
    }
    false
}

/// Index `step` tabs away from the active one, wrapping around.
fn wrapped_category(app: &AppState, step: isize) -> Option<usize> {
    let len = app.categories.len();
    if len == 0 {
        return None;
    }
    let cur = app.active_category.unwrap_or(0);
    let len_i = isize::try_from(len).ok()?;
    let cur_i = isize::try_from(cur).ok()?;
    usize::try_from((cur_i + step).rem_euclid(len_i)).ok()
}

/// What: Highlight a category tab and request its news.
///
/// Details:
/// - Out-of-range indices are ignored.
/// - Canonical items stay untouched until the matching response arrives.
pub fn select_category(app: &mut AppState, index: usize, senders: &RequestSenders) {
    let Some(category_id) = app.categories.get(index).map(|c| c.category_id.clone()) else {
        tracing::warn!(index, count = app.categories.len(), "category index out of range");
        return;
    };
    app.active_category = Some(index);
    let id = app.next_request_id();
    app.latest_category_request_id = id;
    app.in_flight.category_news = true;
    tracing::info!(request_id = id, category = %category_id, "requesting category news");
    if senders
        .news_tx
        .send(CategoryRequest { id, category_id })
        .is_err()
    {
        app.in_flight.category_news = false;
        worker_gone(app, "news");
    }
}

/// Request the category list.
pub fn request_categories(app: &mut AppState, senders: &RequestSenders) {
    app.in_flight.categories = true;
    tracing::info!("requesting categories");
    if senders.categories_tx.send(()).is_err() {
        app.in_flight.categories = false;
        worker_gone(app, "categories");
    }
}

/// Request full details of the highlighted article.
fn request_article(app: &mut AppState, senders: &RequestSenders) {
    let Some(news_id) = app.selected_item().map(|it| it.id.clone()) else {
        return;
    };
    let id = app.next_request_id();
    app.latest_article_request_id = id;
    app.in_flight.article = true;
    tracing::info!(request_id = id, news_id = %news_id, "requesting article");
    if senders
        .article_tx
        .send(ArticleRequest { id, news_id })
        .is_err()
    {
        app.in_flight.article = false;
        worker_gone(app, "article");
    }
}

/// Surface a closed worker channel to the user.
fn worker_gone(app: &mut AppState, worker: &str) {
    tracing::error!(worker, "worker channel closed");
    app.modal = Modal::Alert {
        title: "Internal error".to_string(),
        message: format!("The {worker} worker is no longer running."),
    };
}
