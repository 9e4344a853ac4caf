//! Result deduplication by entity id.
//!
//! Groups results that refer to the same entity and keeps only the
//! highest-scored entry per id. When several entries share the maximum
//! score, the first one seen wins.

use std::collections::HashMap;

use crate::types::ScoredResult;

/// Deduplicate results by id.
///
/// Returns one representative per distinct id, in the order each id was
/// first encountered. The representative is the entry with the highest
/// `score`; a later entry replaces the kept one only if it scores strictly
/// higher.
pub fn deduplicate<T>(results: Vec<ScoredResult<T>>) -> Vec<ScoredResult<T>> {
    // id → index into `kept`.
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(results.len());
    let mut kept: Vec<ScoredResult<T>> = Vec::with_capacity(results.len());

    for result in results {
        match slots.get(&result.id) {
            Some(&slot) => {
                if result.score > kept[slot].score {
                    kept[slot] = result;
                }
            }
            None => {
                slots.insert(result.id.clone(), kept.len());
                kept.push(result);
            }
        }
    }

    kept
}
