//! Preference records: the visitor's answers keyed by question.
//!
//! Records are built one answer at a time by a
//! [`Consultation`](crate::Consultation) or decoded from a JSON request body.
//! Decoding is deliberately lenient: a malformed field is dropped and later
//! read as "no preference" instead of failing the whole request.
//!
//! # Examples
//! ```
//! use sommelier_core::{Answer, PreferenceRecord, QuestionId};
//!
//! let record: PreferenceRecord = serde_json::from_str(
//!     r#"{"type": "Dark intense (>70%)", "flavors": ["Fruity/Tangy", 3], "budget": {"max": 2}}"#,
//! )
//! .expect("records decode leniently");
//! assert_eq!(record.single(QuestionId::Type), Some("Dark intense (>70%)"));
//! assert_eq!(record.values(QuestionId::Flavors), vec!["Fruity/Tangy"]);
//! assert!(!record.is_answered(QuestionId::Budget));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Option text meaning the visitor has no preference for a question.
pub const NO_PREFERENCE: &str = "No preference";

/// Identifiers of the fixed consultation questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    /// Familiarity with fine chocolate.
    Experience,
    /// Preferred chocolate type.
    Type,
    /// Desired flavor families.
    Flavors,
    /// Preferred growing region.
    Origin,
    /// What the chocolate is for.
    Occasion,
    /// Spending bracket.
    Budget,
    /// Appetite for unusual picks.
    Adventure,
}

impl QuestionId {
    /// Return the identifier as used in request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Type => "type",
            Self::Flavors => "flavors",
            Self::Origin => "origin",
            Self::Occasion => "occasion",
            Self::Budget => "budget",
            Self::Adventure => "adventure",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a question identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown question '{0}'")]
pub struct UnknownQuestion(pub String);

impl FromStr for QuestionId {
    type Err = UnknownQuestion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "experience" => Ok(Self::Experience),
            "type" => Ok(Self::Type),
            "flavors" | "flavor" | "flavours" => Ok(Self::Flavors),
            "origin" => Ok(Self::Origin),
            "occasion" => Ok(Self::Occasion),
            "budget" => Ok(Self::Budget),
            "adventure" | "adventurousness" => Ok(Self::Adventure),
            _ => Err(UnknownQuestion(s.to_owned())),
        }
    }
}

/// A single answer: one option or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// One selected option.
    Single(String),
    /// Several selected options, in selection order.
    Multiple(Vec<String>),
}

impl Answer {
    /// Iterate over the selected values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }

    /// Report whether the answer carries no usable preference.
    ///
    /// Blank values and [`NO_PREFERENCE`] do not count.
    #[must_use]
    pub fn is_no_preference(&self) -> bool {
        self.iter().all(is_blank_or_no_preference)
    }

    /// Selected values with blanks and [`NO_PREFERENCE`] removed.
    #[must_use]
    pub fn preferences(&self) -> Vec<&str> {
        self.iter()
            .filter(|value| !is_blank_or_no_preference(value))
            .collect()
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Single(text)),
            Value::Array(items) => Some(Self::Multiple(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text),
                        other => {
                            debug!("dropping non-text list member {other}");
                            None
                        }
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

fn is_blank_or_no_preference(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_PREFERENCE)
}

/// The visitor's answers collected during a consultation.
///
/// # Examples
/// ```
/// use sommelier_core::{PreferenceRecord, QuestionId};
///
/// let record = PreferenceRecord::new()
///     .with_answer(QuestionId::Type, "Milk")
///     .with_answer(QuestionId::Flavors, vec!["Nutty/Creamy".to_owned()]);
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.single(QuestionId::Type), Some("Milk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PreferenceRecord {
    answers: BTreeMap<QuestionId, Answer>,
}

impl PreferenceRecord {
    /// Construct an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A record answering every question with [`NO_PREFERENCE`].
    #[must_use]
    pub fn indifferent() -> Self {
        crate::QUESTIONNAIRE
            .iter()
            .fold(Self::new(), |record, question| {
                record.with_answer(question.id(), NO_PREFERENCE)
            })
    }

    /// Insert or replace an answer.
    pub fn insert(&mut self, question: QuestionId, answer: impl Into<Answer>) {
        self.answers.insert(question, answer.into());
    }

    /// Add an answer while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, question: QuestionId, answer: impl Into<Answer>) -> Self {
        self.insert(question, answer);
        self
    }

    /// Return the answer for a question, if present.
    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<&Answer> {
        self.answers.get(&question)
    }

    /// First selected value for a question, if any.
    #[must_use]
    pub fn single(&self, question: QuestionId) -> Option<&str> {
        self.get(question).and_then(|answer| answer.iter().next())
    }

    /// All selected values for a question; empty when unanswered.
    #[must_use]
    pub fn values(&self, question: QuestionId) -> Vec<&str> {
        self.get(question)
            .map(|answer| answer.iter().collect())
            .unwrap_or_default()
    }

    /// Report whether a question has an answer.
    #[must_use]
    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Report whether no question has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Answer)> {
        self.answers.iter().map(|(id, answer)| (*id, answer))
    }
}

impl<'de> Deserialize<'de> for PreferenceRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut record = Self::new();
        for (key, value) in raw {
            let Ok(question) = key.parse::<QuestionId>() else {
                debug!("ignoring unknown preference field '{key}'");
                continue;
            };
            match Answer::from_json(value) {
                Some(answer) => record.insert(question, answer),
                None => debug!("treating malformed '{question}' answer as no preference"),
            }
        }
        Ok(record)
    }
}
