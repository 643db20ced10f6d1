use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::commands::request_categories;
use crate::sources::NewsClient;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
pub mod handlers;
mod workers;

use channels::{Channels, spawn_event_thread};
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the headliner TUI end-to-end.
///
/// Inputs:
/// - `settings`: Effective settings (file values with command line overrides applied)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal or client setup failures.
///
/// Details:
/// - Spawns the fetch workers and the terminal event thread, requests the
///   category list and drives the event loop until the user quits.
/// - The terminal is restored even when the loop ends with an error.
pub async fn run(settings: Settings) -> Result<()> {
    let client = NewsClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    tracing::info!(api = %client.base_url(), "starting headliner");

    let mut app = AppState::new(
        settings.status_filter,
        settings.sort_order,
        settings.default_category,
    );
    let mut channels = Channels::new(&client);

    setup_terminal()?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    request_categories(&mut app, &channels.senders);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    restore_terminal()?;
    tracing::info!("headliner exited");
    Ok(())
}
