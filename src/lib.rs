//! # search-aggregator
//!
//! Fan-out/merge search aggregation over pluggable providers.
//!
//! Callers that need to "search everything" hand an [`Aggregator`] a set of
//! [`SearchProvider`]s and ask it one question. The aggregator queries every
//! provider concurrently, waits for all of them, drops duplicate hits for the
//! same entity and returns a single list ordered by score.
//!
//! ## Design
//!
//! - Providers are queried concurrently and joined once all have settled
//! - Each provider call runs under its own deadline (default 1000 ms)
//! - Graceful degradation: a provider that errors, times out or panics
//!   contributes nothing, the others are unaffected
//! - Results sharing an id collapse to the highest-scored one
//! - Output is stably sorted by score, so ties keep first-seen order
//! - Scoring belongs to providers; the aggregator never rescores
//!
//! ## Logging
//!
//! Query terms are logged only at trace level. Provider failures are logged
//! at warn level with the provider's [`name`](SearchProvider::name).

pub mod aggregator;
pub mod config;
pub mod error;
pub mod merge;
pub mod provider;
pub mod types;

pub use aggregator::Aggregator;
pub use config::AggregatorConfig;
pub use error::{Result, SearchError};
pub use merge::merge_results;
pub use provider::SearchProvider;
pub use types::ScoredResult;

/// Query `providers` once with the default configuration.
///
/// Convenience wrapper around [`Aggregator::new`] and [`Aggregator::query`]
/// for callers that do not keep an aggregator around.
///
/// # Errors
///
/// Same as [`Aggregator::query`].
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # async fn example(
/// #     providers: Vec<Arc<dyn search_aggregator::SearchProvider<String>>>,
/// # ) -> search_aggregator::Result<()> {
/// let results = search_aggregator::search("telemetry", providers).await?;
/// for result in &results {
///     println!("{} ({:.2}): {}", result.id, result.score, result.object);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search<T: Send + 'static>(
    term: &str,
    providers: Vec<std::sync::Arc<dyn SearchProvider<T>>>,
) -> Result<Vec<ScoredResult<T>>> {
    Aggregator::new(providers).query(term).await
}
