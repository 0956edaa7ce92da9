//! Facade crate for the chocolate sommelier.
//!
//! This crate re-exports the core domain types and the preference scorer, and
//! exposes catalog persistence behind the `data` feature.
//!
//! ```
//! # #[cfg(feature = "test-support")]
//! # {
//! use cacao_sommelier::{PreferenceRecord, PreferenceScorer, QuestionId, RecommendOptions};
//! use cacao_sommelier::test_support::sample_catalog;
//!
//! let catalog = sample_catalog();
//! let prefs = PreferenceRecord::new().with_answer(QuestionId::Type, "Milk");
//! let set = PreferenceScorer::default().recommend(catalog.items(), &prefs, RecommendOptions::default());
//! assert_eq!(set.recommendations().first().map(|r| r.item.id.as_str()), Some("6"));
//! # }
//! ```

#![forbid(unsafe_code)]

pub use sommelier_core::{
    Answer, Catalog, CatalogMetadata, ChocolateItem, ChocolateType, Consultation,
    ConsultationError, MAX_SCORE, NO_PREFERENCE, PreferenceRecord, PriceTier, QUESTIONNAIRE,
    Question, QuestionId, Scorer, Step, TastingScore,
};
pub use sommelier_scorer::{
    ALGORITHM_VERSION, DEFAULT_LIMIT, Factor, FactorScore, PreferenceScorer, RecommendOptions,
    Recommendation, RecommendationSet, ScoreBreakdown, ScoreWeights, ScorerError, Status,
};

#[cfg(feature = "test-support")]
pub use sommelier_core::test_support;

#[cfg(feature = "data")]
pub use sommelier_data::{
    CatalogError, CatalogLoad, GenerateError, GeneratorConfig, SkippedEntry, generate_catalog,
    load_catalog, parse_catalog, write_catalog, write_generated_catalog,
};
