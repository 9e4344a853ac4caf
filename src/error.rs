//! Error types for the search-aggregator crate.
//!
//! All errors use stable string messages suitable for display and
//! programmatic handling. Query terms never appear in error messages.

/// Errors that can occur while aggregating search results.
///
/// Provider-level variants ([`Provider`](Self::Provider),
/// [`Timeout`](Self::Timeout)) are isolated by the aggregator and never
/// reach the caller of [`Aggregator::query`](crate::Aggregator::query).
/// The remaining variants describe aggregator-level faults and do.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A single provider failed to produce results.
    #[error("provider error: {0}")]
    Provider(String),

    /// A single provider exceeded its deadline.
    #[error("provider timed out: {0}")]
    Timeout(String),

    /// A malformed result reached the merger (empty id or NaN score).
    #[error("invalid result: {0}")]
    InvalidResult(String),

    /// Invalid aggregator configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for search-aggregator results.
pub type Result<T> = std::result::Result<T, SearchError>;
