//! Score ordering for merged results.

use std::cmp::Ordering;

use crate::types::ScoredResult;

/// Sort results by score, highest first.
///
/// The sort is stable: results with equal scores keep their relative
/// input order.
pub fn order_by_score<T>(mut results: Vec<ScoredResult<T>>) -> Vec<ScoredResult<T>> {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}
