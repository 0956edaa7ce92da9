//! Core domain types for the chocolate sommelier.
//!
//! The crate models the static catalog ([`ChocolateItem`], [`Catalog`]), the
//! answers a visitor gives while being consulted ([`PreferenceRecord`]) and the
//! fixed question sequence that collects them ([`Consultation`]). Scoring
//! implementations plug in through the [`Scorer`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod chocolate;
pub mod preference;
pub mod price;
pub mod question;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogMetadata};
pub use chocolate::{ChocolateItem, ChocolateItemError, ChocolateType, TastingScore};
pub use preference::{Answer, NO_PREFERENCE, PreferenceRecord, QuestionId};
pub use price::{PriceTier, PriceTierError};
pub use question::{Consultation, ConsultationError, QUESTIONNAIRE, Question, Step};
pub use scorer::{MAX_SCORE, Scorer};
