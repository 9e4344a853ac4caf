//! Core result type exchanged between providers, the aggregator and callers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// A single scored match produced by a search provider.
///
/// `T` is the caller's entity handle. The aggregator never inspects it;
/// it is moved through the merge untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult<T> {
    /// Opaque identifier of the underlying entity. Several results, from
    /// the same or different providers, may share an id.
    pub id: String,
    /// Handle to the matched entity.
    pub object: T,
    /// Provider-assigned relevance score (higher is better).
    pub score: f64,
}

impl<T> ScoredResult<T> {
    /// Create a new result.
    pub fn new(id: impl Into<String>, object: T, score: f64) -> Self {
        Self {
            id: id.into(),
            object,
            score,
        }
    }

    /// Checks that this result can take part in a merge.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidResult`] if the id is empty or the
    /// score is NaN. Infinite scores are accepted.
    pub fn validate(&self) -> Result<()> {
        self.check(None)
    }

    /// Like [`validate`](Self::validate), naming `position` (the index of
    /// this result in the merge input) in the error.
    pub(crate) fn validate_at(&self, position: usize) -> Result<()> {
        self.check(Some(position))
    }

    fn check(&self, position: Option<usize>) -> Result<()> {
        let subject = match position {
            Some(position) => format!("result {position}"),
            None => "result".to_string(),
        };
        if self.id.is_empty() {
            return Err(SearchError::InvalidResult(format!(
                "{subject} has an empty id"
            )));
        }
        if self.score.is_nan() {
            return Err(SearchError::InvalidResult(format!(
                "{subject} (`{}`) has a NaN score",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_result_construction() {
        let result = ScoredResult::new("doc-1", "Telemetry", 1.5);
        assert_eq!(result.id, "doc-1");
        assert_eq!(result.object, "Telemetry");
        assert!((result.score - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn well_formed_result_validates() {
        let result = ScoredResult::new("doc-1", (), 0.0);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let result = ScoredResult::new("", (), 1.0);
        let err = result.validate().unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn nan_score_rejected() {
        let result = ScoredResult::new("doc-7", (), f64::NAN);
        let err = result.validate().unwrap_err();
        assert!(err.to_string().contains("doc-7"));
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn validate_at_names_position() {
        let err = ScoredResult::new("", (), 1.0).validate_at(4).unwrap_err();
        assert_eq!(err.to_string(), "invalid result: result 4 has an empty id");

        let err = ScoredResult::new("doc-9", (), f64::NAN)
            .validate_at(2)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid result: result 2 (`doc-9`) has a NaN score"
        );
    }

    #[test]
    fn infinite_scores_accepted() {
        assert!(ScoredResult::new("a", (), f64::INFINITY).validate().is_ok());
        assert!(ScoredResult::new("b", (), f64::NEG_INFINITY)
            .validate()
            .is_ok());
    }

    #[test]
    fn scored_result_serde_round_trip() {
        let result = ScoredResult::new("doc-2", "Battery voltage".to_string(), 0.9);
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: ScoredResult<String> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, result);
    }
}
