use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::app::commands::RequestSenders;
use crate::sources::NewsClient;
use crate::state::{ArticleDetails, Category, CategoryNews, FetchFailure};

use super::workers;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Request senders go to the command layer; receivers are polled by the event loop.
pub struct Channels {
    /// Terminal events from the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Stops the event thread on exit.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Worker request senders.
    pub senders: RequestSenders,
    pub categories_rx: mpsc::UnboundedReceiver<Vec<Category>>,
    pub news_rx: mpsc::UnboundedReceiver<CategoryNews>,
    pub article_rx: mpsc::UnboundedReceiver<ArticleDetails>,
    /// Failures from every worker.
    pub failure_rx: mpsc::UnboundedReceiver<FetchFailure>,
}

impl Channels {
    /// What: Create all channels and spawn the fetch workers.
    ///
    /// Inputs:
    /// - `client`: News API client shared by the workers
    ///
    /// Details:
    /// - Must be called from within a tokio runtime.
    pub fn new(client: &NewsClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));

        let (categories_tx, categories_req_rx) = mpsc::unbounded_channel::<()>();
        let (news_tx, news_req_rx) = mpsc::unbounded_channel();
        let (article_tx, article_req_rx) = mpsc::unbounded_channel();
        let (categories_res_tx, categories_rx) = mpsc::unbounded_channel::<Vec<Category>>();
        let (news_res_tx, news_rx) = mpsc::unbounded_channel::<CategoryNews>();
        let (article_res_tx, article_rx) = mpsc::unbounded_channel::<ArticleDetails>();
        let (failure_tx, failure_rx) = mpsc::unbounded_channel::<FetchFailure>();

        workers::categories::spawn_categories_worker(
            client.clone(),
            categories_req_rx,
            categories_res_tx,
            failure_tx.clone(),
        );
        workers::news::spawn_news_worker(
            client.clone(),
            news_req_rx,
            news_res_tx,
            failure_tx.clone(),
        );
        workers::details::spawn_details_worker(
            client.clone(),
            article_req_rx,
            article_res_tx,
            failure_tx,
        );

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            senders: RequestSenders {
                categories_tx,
                news_tx,
                article_tx,
            },
            categories_rx,
            news_rx,
            article_rx,
            failure_rx,
        }
    }
}

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `event_tx`: Destination for crossterm events
/// - `cancelled`: Set on exit; the thread stops at its next poll
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        use std::sync::atomic::Ordering;
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            // Short poll so the cancel flag is observed promptly
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal event read failed"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}
