use tokio::sync::mpsc;

use crate::sources::NewsClient;
use crate::state::{CategoryNews, CategoryRequest, FetchFailure, FetchKind};

/// What: Spawn the category news worker.
///
/// Inputs:
/// - `client`: News API client
/// - `req_rx`: Tagged category requests
/// - `res_tx`: Category news tagged with the request id
/// - `failure_tx`: Fetch failures tagged with the request id
///
/// Details:
/// - Every request runs in its own task, so responses may arrive out of order.
///   The event loop discards all but the newest id.
pub fn spawn_news_worker(
    client: NewsClient,
    mut req_rx: mpsc::UnboundedReceiver<CategoryRequest>,
    res_tx: mpsc::UnboundedSender<CategoryNews>,
    failure_tx: mpsc::UnboundedSender<FetchFailure>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let client = client.clone();
            let res_tx = res_tx.clone();
            let failure_tx = failure_tx.clone();
            tokio::spawn(async move {
                match client.fetch_category_news(&req.category_id).await {
                    Ok(items) => {
                        let _ = res_tx.send(CategoryNews {
                            id: req.id,
                            category_id: req.category_id,
                            items,
                        });
                    }
                    Err(e) => {
                        tracing::warn!(
                            request_id = req.id,
                            category = %req.category_id,
                            error = %e,
                            "category news fetch failed"
                        );
                        let _ = failure_tx.send(FetchFailure {
                            request_id: req.id,
                            kind: FetchKind::CategoryNews,
                            message: e.to_string(),
                        });
                    }
                }
            });
        }
        tracing::debug!("news worker stopped");
    });
}
