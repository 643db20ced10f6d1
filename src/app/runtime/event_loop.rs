use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{
    handle_article, handle_categories, handle_category_news, handle_fetch_failure,
};

/// What: Process one message from any runtime channel.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Exits when every channel is closed, which only happens on shutdown.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            if let Some(cmd) = crate::events::handle_event(&ev, app) {
                return crate::app::apply_command(app, cmd, &channels.senders);
            }
            false
        }
        Some(categories) = channels.categories_rx.recv() => {
            handle_categories(app, categories, &channels.senders);
            false
        }
        Some(news) = channels.news_rx.recv() => {
            handle_category_news(app, news);
            false
        }
        Some(details) = channels.article_rx.recv() => {
            handle_article(app, details);
            false
        }
        Some(failure) = channels.failure_rx.recv() => {
            handle_fetch_failure(app, failure);
            false
        }
        else => true,
    }
}

/// What: Redraw and dispatch messages until a quit command arrives.
///
/// Inputs:
/// - `terminal`: Terminal to draw on
/// - `app`: Application state
/// - `channels`: Communication channels
pub async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Err(e) = terminal.draw(|f| ui(f, app)) {
            tracing::warn!(error = %e, "draw failed");
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
