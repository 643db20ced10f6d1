use tokio::sync::mpsc;

use crate::sources::NewsClient;
use crate::state::{Category, FetchFailure, FetchKind};

/// What: Spawn the category list worker.
///
/// Inputs:
/// - `client`: News API client
/// - `req_rx`: Reload triggers
/// - `res_tx`: Fetched category lists
/// - `failure_tx`: Fetch failures
///
/// Details:
/// - Requests are served one after another; the category list has no id guard.
pub fn spawn_categories_worker(
    client: NewsClient,
    mut req_rx: mpsc::UnboundedReceiver<()>,
    res_tx: mpsc::UnboundedSender<Vec<Category>>,
    failure_tx: mpsc::UnboundedSender<FetchFailure>,
) {
    tokio::spawn(async move {
        while req_rx.recv().await.is_some() {
            match client.fetch_categories().await {
                Ok(categories) => {
                    let _ = res_tx.send(categories);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "category list fetch failed");
                    let _ = failure_tx.send(FetchFailure {
                        request_id: 0,
                        kind: FetchKind::Categories,
                        message: e.to_string(),
                    });
                }
            }
        }
        tracing::debug!("categories worker stopped");
    });
}
