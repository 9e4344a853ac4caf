//! Trait definition for pluggable search providers.
//!
//! A provider is any source of pre-scored results: a full-text index, a
//! metadata catalogue, a remote service. The aggregator knows nothing about
//! how a provider finds or scores matches; it only calls
//! [`SearchProvider::query`] and merges what comes back.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ScoredResult;

/// A pluggable search backend producing scored results of entity type `T`.
///
/// Implementations must be `Send + Sync` because the aggregator queries all
/// providers concurrently. They are held as `Arc<dyn SearchProvider<T>>`.
///
/// All providers are polled on the caller's task, so [`query`](Self::query)
/// must not block the thread. Blocking I/O or heavy CPU work belongs behind
/// [`tokio::task::spawn_blocking`] or an async client; a provider that blocks
/// stalls its siblings and cannot be cut off by the aggregator's deadline.
#[async_trait]
pub trait SearchProvider<T: Send>: Send + Sync {
    /// Run a search and return scored results.
    ///
    /// # Arguments
    ///
    /// * `term` — The query term as given to the aggregator.
    /// * `max_results` — Cap on the number of results to return.
    /// * `timeout` — Deadline for this call. The aggregator enforces it too,
    ///   so a provider that overruns simply has its results discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`](crate::SearchError) (usually
    /// [`SearchError::Provider`](crate::SearchError::Provider)) if the
    /// search cannot be completed. The aggregator isolates the failure.
    async fn query(
        &self,
        term: &str,
        max_results: usize,
        timeout: Duration,
    ) -> Result<Vec<ScoredResult<T>>>;

    /// Label used in log output.
    fn name(&self) -> &str {
        "provider"
    }
}
