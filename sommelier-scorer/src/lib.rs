//! Preference scoring and ranking for the chocolate sommelier.
//!
//! [`PreferenceScorer`] implements the [`Scorer`](sommelier_core::Scorer)
//! trait by combining five weighted sub-scores (rating, type, flavor, origin
//! and budget), each normalised to `0..=100`. The flavor and origin factors
//! consult the static tables in [`tables`]. On top of the per-item score the
//! crate ranks a catalog, optionally spreads the shortlist across brands and
//! origins, and packages the result as a serialisable [`RecommendationSet`].
//!
//! # Examples
//!
//! ```
//! use sommelier_core::{PreferenceRecord, QuestionId, test_support::sample_catalog};
//! use sommelier_scorer::{PreferenceScorer, RecommendOptions};
//!
//! let catalog = sample_catalog();
//! let prefs = PreferenceRecord::new()
//!     .with_answer(QuestionId::Type, "Dark intense (>70%)")
//!     .with_answer(QuestionId::Flavors, vec!["Floral/Delicate".to_owned()]);
//! let shortlist = PreferenceScorer::default().recommend(catalog.items(), &prefs, RecommendOptions::default());
//! let top = shortlist.recommendations().first().expect("catalog is not empty");
//! assert_eq!(top.item.name, "Ecuador 72%");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod preference;
mod recommend;
pub mod tables;
mod weights;

pub use error::ScorerError;
pub use preference::{FactorScore, PreferenceScorer, ScoreBreakdown};
pub use recommend::{
    ALGORITHM_VERSION, DEFAULT_LIMIT, RecommendOptions, Recommendation, RecommendationSet, Status,
    diversify, sort_ranked,
};
pub use weights::{Factor, ScoreWeights};
