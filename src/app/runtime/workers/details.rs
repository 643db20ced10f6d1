use tokio::sync::mpsc;

use crate::sources::NewsClient;
use crate::state::{ArticleDetails, ArticleRequest, FetchFailure, FetchKind};

/// What: Spawn the article details worker.
///
/// Inputs:
/// - `client`: News API client
/// - `req_rx`: Tagged article requests
/// - `res_tx`: Articles tagged with the request id
/// - `failure_tx`: Fetch failures tagged with the request id
pub fn spawn_details_worker(
    client: NewsClient,
    mut req_rx: mpsc::UnboundedReceiver<ArticleRequest>,
    res_tx: mpsc::UnboundedSender<ArticleDetails>,
    failure_tx: mpsc::UnboundedSender<FetchFailure>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let client = client.clone();
            let res_tx = res_tx.clone();
            let failure_tx = failure_tx.clone();
            tokio::spawn(async move {
                match client.fetch_article(&req.news_id).await {
                    Ok(item) => {
                        let _ = res_tx.send(ArticleDetails { id: req.id, item });
                    }
                    Err(e) => {
                        tracing::warn!(
                            request_id = req.id,
                            news_id = %req.news_id,
                            error = %e,
                            "article fetch failed"
                        );
                        let _ = failure_tx.send(FetchFailure {
                            request_id: req.id,
                            kind: FetchKind::Article,
                            message: e.to_string(),
                        });
                    }
                }
            });
        }
        tracing::debug!("details worker stopped");
    });
}
