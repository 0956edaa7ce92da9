//! Error types raised while configuring the preference scorer.

use thiserror::Error;

/// Errors raised when configuring a [`PreferenceScorer`](crate::PreferenceScorer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// A weight was negative or not finite.
    #[error("weight for {factor} must be a finite non-negative number, got {value}")]
    InvalidWeight {
        /// Factor whose weight was rejected.
        factor: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The weights did not sum to one.
    #[error("weights must sum to 1.0, got {total}")]
    WeightsDoNotSumToOne {
        /// Sum of the supplied weights.
        total: f32,
    },
}
