//! Relative weighting of the five scoring factors.

use serde::{Deserialize, Serialize};

use crate::ScorerError;

const SUM_TOLERANCE: f32 = 1e-4;

/// One of the independent sub-scores combined into a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    /// Catalog rating of the item.
    Rating,
    /// Chocolate type against the preferred type.
    Type,
    /// Flavor notes against the requested families.
    Flavor,
    /// Growing origin against the preferred region.
    Origin,
    /// Price tier against the budget.
    Budget,
}

impl Factor {
    /// Every factor in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Rating,
        Self::Type,
        Self::Flavor,
        Self::Origin,
        Self::Budget,
    ];

    /// Name used in score breakdowns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Type => "type",
            Self::Flavor => "flavor",
            Self::Origin => "origin",
            Self::Budget => "budget",
        }
    }
}

/// Weights applied to each factor; they must sum to `1.0`.
///
/// # Examples
/// ```
/// use sommelier_scorer::ScoreWeights;
///
/// let weights = ScoreWeights { rating: 0.5, type_match: 0.5, flavor: 0.0, origin: 0.0, budget: 0.0 };
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the rating sub-score.
    pub rating: f32,
    /// Weight of the type sub-score.
    #[serde(rename = "type")]
    pub type_match: f32,
    /// Weight of the flavor sub-score.
    pub flavor: f32,
    /// Weight of the origin sub-score.
    pub origin: f32,
    /// Weight of the budget sub-score.
    pub budget: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating: 0.30_f32,
            type_match: 0.25_f32,
            flavor: 0.25_f32,
            origin: 0.12_f32,
            budget: 0.08_f32,
        }
    }
}

impl ScoreWeights {
    /// Weight assigned to `factor`.
    #[must_use]
    pub const fn get(self, factor: Factor) -> f32 {
        match factor {
            Factor::Rating => self.rating,
            Factor::Type => self.type_match,
            Factor::Flavor => self.flavor,
            Factor::Origin => self.origin,
            Factor::Budget => self.budget,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeight`] for a negative or non-finite
    /// weight and [`ScorerError::WeightsDoNotSumToOne`] when the total strays
    /// from `1.0` by more than `1e-4`.
    pub fn validate(self) -> Result<Self, ScorerError> {
        if let Some(factor) = Factor::ALL
            .into_iter()
            .find(|factor| !is_usable(self.get(*factor)))
        {
            return Err(ScorerError::InvalidWeight {
                factor: factor.as_str(),
                value: self.get(factor),
            });
        }
        let total = self.total();
        if within_tolerance(total) {
            Ok(self)
        } else {
            Err(ScorerError::WeightsDoNotSumToOne { total })
        }
    }

    fn total(self) -> f32 {
        Factor::ALL.into_iter().map(|factor| self.get(factor)).sum()
    }
}

const fn is_usable(weight: f32) -> bool {
    weight.is_finite() && weight >= 0.0_f32
}

#[expect(
    clippy::float_arithmetic,
    reason = "tolerance check subtracts the expected total"
)]
fn within_tolerance(total: f32) -> bool {
    (total - 1.0_f32).abs() <= SUM_TOLERANCE
}
