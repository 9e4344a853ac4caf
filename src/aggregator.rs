//! Core aggregator: concurrent fan-out to every provider, then merge.
//!
//! Queries all providers concurrently with [`futures::future::join_all`],
//! isolates each call behind its own deadline and panic guard, concatenates
//! the surviving results in provider order and hands them to
//! [`merge_results`].

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use crate::config::AggregatorConfig;
use crate::error::{Result, SearchError};
use crate::merge::merge_results;
use crate::provider::SearchProvider;
use crate::types::ScoredResult;

/// Treats several search providers as one.
///
/// Must be driven from within a Tokio runtime with the time driver enabled,
/// since each provider call runs under [`tokio::time::timeout`].
pub struct Aggregator<T: Send + 'static> {
    providers: Vec<Arc<dyn SearchProvider<T>>>,
    config: AggregatorConfig,
}

impl<T: Send + 'static> Aggregator<T> {
    /// Create an aggregator over `providers` with the default configuration
    /// (100 results per provider, 1000 ms per-provider deadline).
    pub fn new(providers: Vec<Arc<dyn SearchProvider<T>>>) -> Self {
        Self {
            providers,
            config: AggregatorConfig::default(),
        }
    }

    /// Create an aggregator with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation.
    pub fn with_config(
        providers: Vec<Arc<dyn SearchProvider<T>>>,
        config: AggregatorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { providers, config })
    }

    /// The configuration applied to every [`query`](Self::query).
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Number of configured providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Search every provider and return one merged result list.
    ///
    /// # Pipeline
    ///
    /// 1. Fan out `term` to all providers concurrently
    /// 2. Wait for every call to settle; failures, timeouts and panics are
    ///    logged at warn level and contribute nothing
    /// 3. Concatenate results in provider order
    /// 4. Deduplicate by id and sort by score (see [`merge_results`])
    ///
    /// With no providers this resolves to an empty list.
    ///
    /// # Errors
    ///
    /// Never fails because of an individual provider. Returns
    /// [`SearchError::InvalidResult`] if a provider hands back a malformed
    /// result (empty id or NaN score).
    pub async fn query(&self, term: &str) -> Result<Vec<ScoredResult<T>>> {
        self.fan_out(term, &self.config).await
    }

    /// Like [`query`](Self::query), with a one-off configuration in place of
    /// the aggregator's own.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, otherwise the
    /// same as [`query`](Self::query).
    pub async fn query_with(
        &self,
        term: &str,
        config: &AggregatorConfig,
    ) -> Result<Vec<ScoredResult<T>>> {
        config.validate()?;
        self.fan_out(term, config).await
    }

    async fn fan_out(
        &self,
        term: &str,
        config: &AggregatorConfig,
    ) -> Result<Vec<ScoredResult<T>>> {
        tracing::trace!(term, providers = self.providers.len(), "aggregating query");

        let max_results = config.max_results;
        let timeout = config.timeout();

        let calls = self
            .providers
            .iter()
            .map(|provider| query_provider(provider.as_ref(), term, max_results, timeout));
        let outcomes = futures::future::join_all(calls).await;

        let combined: Vec<ScoredResult<T>> = outcomes.into_iter().flatten().collect();
        merge_results(combined)
    }
}

impl<T: Send + 'static> fmt::Debug for Aggregator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("Aggregator")
            .field("providers", &names)
            .field("config", &self.config)
            .finish()
    }
}

/// Query a single provider, turning every kind of failure into an empty set.
async fn query_provider<T: Send + 'static>(
    provider: &dyn SearchProvider<T>,
    term: &str,
    max_results: usize,
    timeout: Duration,
) -> Vec<ScoredResult<T>> {
    let name = provider.name();
    let call = AssertUnwindSafe(provider.query(term, max_results, timeout)).catch_unwind();

    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(Ok(results))) => {
            let count = results.len();
            tracing::debug!(provider = %name, count, "provider returned results");
            if count > max_results {
                tracing::warn!(
                    provider = %name,
                    count,
                    max_results,
                    "provider exceeded requested result cap"
                );
            }
            results
        }
        Ok(Ok(Err(err))) => {
            tracing::warn!(provider = %name, error = %err, "provider query failed");
            Vec::new()
        }
        Ok(Err(_)) => {
            let err = SearchError::Provider(format!("{name} panicked"));
            tracing::warn!(provider = %name, error = %err, "provider query failed");
            Vec::new()
        }
        Err(_) => {
            let err = SearchError::Timeout(format!("{name} after {}ms", timeout.as_millis()));
            tracing::warn!(provider = %name, error = %err, "provider query timed out");
            Vec::new()
        }
    }
}
