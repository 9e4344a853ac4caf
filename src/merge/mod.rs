//! Result merging: validation, dedup by id, score ordering.
//!
//! This module turns the concatenated output of every provider into the
//! final answer: each entity appears once, carrying its best score, and the
//! list runs from most to least relevant.

pub mod dedup;
pub mod order;

pub use dedup::deduplicate;
pub use order::order_by_score;

use crate::error::Result;
use crate::types::ScoredResult;

/// Merge a combined result sequence into a deduplicated, score-ordered list.
///
/// # Pipeline
///
/// 1. Validate every result (non-empty id, non-NaN score)
/// 2. Deduplicate by id, keeping the highest score (first seen wins ties)
/// 3. Stable sort by score, descending
///
/// Equal-score results therefore come out in the order their ids were
/// first seen in `results`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidResult`](crate::SearchError::InvalidResult)
/// for the first malformed result, naming its index in `results`. Nothing
/// is merged in that case.
pub fn merge_results<T>(results: Vec<ScoredResult<T>>) -> Result<Vec<ScoredResult<T>>> {
    for (position, result) in results.iter().enumerate() {
        if let Err(err) = result.validate_at(position) {
            tracing::warn!(position, error = %err, "rejecting malformed result");
            return Err(err);
        }
    }

    let input_count = results.len();
    let merged = order_by_score(deduplicate(results));
    tracing::debug!(input_count, output_count = merged.len(), "merged results");

    Ok(merged)
}
