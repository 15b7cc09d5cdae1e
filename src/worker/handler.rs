//! Fetch worker implementation.
//!
//! The worker turns a [`FetchRequest`] into one call on the injected
//! [`CatalogSource`] and folds whatever comes back, success or failure, into a
//! [`FetchResponse`]. Nothing escapes as an error: the controller decides what
//! a failure means for its state.

use crate::catalog::CatalogSource;
use crate::domain::error::Result;
use crate::worker::{FetchKind, FetchOutcome, FetchRequest, FetchResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

/// Executes fetch requests against a catalog source.
#[derive(Clone)]
pub struct FetchWorker {
    source: Arc<dyn CatalogSource>,
}

impl FetchWorker {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Helper for folding fetch results with consistent logging.
    fn into_response<T, F>(operation: &str, request: &FetchRequest, result: Result<T>, on_success: F) -> FetchResponse
    where
        F: FnOnce(T) -> FetchOutcome,
    {
        let outcome = match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "fetch succeeded");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "fetch failed");
                FetchOutcome::from_error(e)
            }
        };
        FetchResponse::new(request, outcome)
    }

    /// Performs one request and returns its normalized response.
    pub async fn handle_request(&self, request: FetchRequest) -> FetchResponse {
        match &request.kind {
            FetchKind::Page { cursor, limit, category } => {
                let result = self.source.fetch_page(*cursor, *limit, category.as_deref()).await;
                Self::into_response("fetch page", &request, result, |batch| {
                    tracing::debug!(count = batch.items.len(), has_more = batch.has_more, "page received");
                    FetchOutcome::Page(batch)
                })
            }
            FetchKind::Lookup { key } | FetchKind::Detail { key } => {
                let result = self.source.fetch_by_key(key).await;
                Self::into_response("fetch by key", &request, result, FetchOutcome::Found)
            }
            FetchKind::Categories => {
                let result = self.source.fetch_categories().await;
                Self::into_response("fetch categories", &request, result, FetchOutcome::Categories)
            }
        }
    }

    /// Runs `request` on the tokio runtime and sends the response to `tx`.
    ///
    /// Must be called from within a runtime. A closed channel means the
    /// controller has shut down; the response is dropped.
    pub fn spawn(&self, request: FetchRequest, tx: UnboundedSender<FetchResponse>) {
        let span = tracing::debug_span!("fetch", generation = request.generation, kind = ?request.kind);
        let worker = self.clone();

        tokio::spawn(
            async move {
                let response = worker.handle_request(request).await;
                if tx.send(response).is_err() {
                    tracing::debug!("controller gone, dropping fetch response");
                }
            }
            .instrument(span),
        );
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker").finish_non_exhaustive()
    }
}
