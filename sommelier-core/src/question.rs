//! The fixed consultation questionnaire and its linear controller.
//!
//! A [`Consultation`] walks [`QUESTIONNAIRE`] front to back. Each answer moves
//! the cursor one question forward; once the cursor passes the last question
//! the caller scores the catalog against the collected
//! [`PreferenceRecord`]. Questions whose answers are already known can be
//! skipped by seeding the consultation with [`Consultation::with_known`].
//!
//! # Examples
//! ```
//! use sommelier_core::{Consultation, Step};
//!
//! let mut consultation = Consultation::new();
//! while let Some(question) = consultation.current() {
//!     let answer = question.select(&[1]).expect("first option is valid");
//!     consultation.answer(answer).expect("consultation still open");
//! }
//! assert!(consultation.is_ready());
//! assert_eq!(consultation.record().len(), 7);
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::{Answer, NO_PREFERENCE, PreferenceRecord, QuestionId};

/// One question: identifier, prompt and selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    prompt: &'static str,
    options: &'static [&'static str],
    multiple: bool,
}

/// The fixed question sequence, in asking order.
pub const QUESTIONNAIRE: [Question; 7] = [
    Question {
        id: QuestionId::Experience,
        prompt: "What's your experience level with fine chocolate?",
        options: &["Beginner", "Amateur", "Connoisseur", "Expert"],
        multiple: false,
    },
    Question {
        id: QuestionId::Type,
        prompt: "What type of chocolate do you generally prefer?",
        options: &[
            "Dark intense (>70%)",
            "Dark balanced (50-70%)",
            "Milk",
            "White",
            "Ruby",
            NO_PREFERENCE,
        ],
        multiple: false,
    },
    Question {
        id: QuestionId::Flavors,
        prompt: "What flavors are you looking for?",
        options: &[
            "Fruity/Tangy",
            "Nutty/Creamy",
            "Floral/Delicate",
            "Spicy/Complex",
            "Classic/Traditional",
        ],
        multiple: true,
    },
    Question {
        id: QuestionId::Origin,
        prompt: "Do you have an origin preference?",
        options: &["South America", "Africa", "Asia", "Caribbean", NO_PREFERENCE],
        multiple: false,
    },
    Question {
        id: QuestionId::Occasion,
        prompt: "What's the occasion?",
        options: &["Personal tasting", "Gift", "Cooking/Baking", "Food pairing"],
        multiple: false,
    },
    Question {
        id: QuestionId::Budget,
        prompt: "What's your budget?",
        options: &["$ (under $5)", "$$ ($5-10)", "$$$ ($10-20)", "$$$$ (over $20)"],
        multiple: false,
    },
    Question {
        id: QuestionId::Adventure,
        prompt: "How adventurous are you?",
        options: &[
            "I prefer safe choices",
            "I like moderate discovery",
            "I love bold discoveries",
        ],
        multiple: false,
    },
];

/// Errors raised while answering questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsultationError {
    /// Every question has already been answered.
    #[error("consultation is complete; no question is awaiting an answer")]
    Complete,
    /// A choice number did not name an option.
    #[error("choice {choice} is not an option for '{question}' (expected 1..={available})")]
    OptionOutOfRange {
        /// Question being answered.
        question: QuestionId,
        /// One-based choice supplied.
        choice: usize,
        /// Number of options offered.
        available: usize,
    },
    /// Several choices were given for a single-choice question.
    #[error("'{question}' accepts a single choice")]
    MultipleNotAllowed {
        /// Question being answered.
        question: QuestionId,
    },
    /// No choice was given for a single-choice question.
    #[error("'{question}' requires a choice")]
    EmptySelection {
        /// Question being answered.
        question: QuestionId,
    },
}

impl Question {
    /// Identifier used as the preference key.
    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    /// Text shown to the visitor.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Selectable options in display order.
    #[must_use]
    pub const fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Whether several options may be chosen.
    #[must_use]
    pub const fn allows_multiple(&self) -> bool {
        self.multiple
    }

    /// Turn one-based option numbers into an [`Answer`].
    ///
    /// Multi-choice questions always yield [`Answer::Multiple`], even for an
    /// empty selection.
    ///
    /// # Errors
    /// Returns [`ConsultationError`] when a choice is out of range, or when a
    /// single-choice question receives zero or several choices.
    pub fn select(&self, choices: &[usize]) -> Result<Answer, ConsultationError> {
        let picked = choices
            .iter()
            .map(|&choice| self.option(choice))
            .collect::<Result<Vec<_>, _>>()?;
        if self.multiple {
            return Ok(Answer::Multiple(
                picked.into_iter().map(str::to_owned).collect(),
            ));
        }
        match picked.as_slice() {
            [] => Err(ConsultationError::EmptySelection { question: self.id }),
            [only] => Ok(Answer::Single((*only).to_owned())),
            _ => Err(ConsultationError::MultipleNotAllowed { question: self.id }),
        }
    }

    fn option(&self, choice: usize) -> Result<&'static str, ConsultationError> {
        choice
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .copied()
            .ok_or(ConsultationError::OptionOutOfRange {
                question: self.id,
                choice,
                available: self.options.len(),
            })
    }
}

/// What the caller should do after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ask this question next.
    Ask(&'static Question),
    /// Every question is answered; score the catalog.
    Ready,
}

/// Cursor over [`QUESTIONNAIRE`] plus the answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    index: usize,
    record: PreferenceRecord,
}

impl Default for Consultation {
    fn default() -> Self {
        Self::new()
    }
}

impl Consultation {
    /// Start a consultation with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_known(PreferenceRecord::new())
    }

    /// Start a consultation that skips questions already answered in `known`.
    ///
    /// ```
    /// use sommelier_core::{Consultation, PreferenceRecord, QuestionId};
    ///
    /// let known = PreferenceRecord::new().with_answer(QuestionId::Experience, "Expert");
    /// let consultation = Consultation::with_known(known);
    /// assert_eq!(consultation.current().map(|q| q.id()), Some(QuestionId::Type));
    /// ```
    #[must_use]
    pub fn with_known(known: PreferenceRecord) -> Self {
        let mut consultation = Self {
            index: 0,
            record: known,
        };
        consultation.skip_answered();
        consultation
    }

    /// The question awaiting an answer, or `None` once complete.
    #[must_use]
    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONNAIRE.get(self.index)
    }

    /// Record an answer to the current question and advance.
    ///
    /// # Errors
    /// Returns [`ConsultationError::Complete`] when no question is pending.
    pub fn answer(&mut self, answer: Answer) -> Result<Step, ConsultationError> {
        let question = self.current().ok_or(ConsultationError::Complete)?;
        self.record.insert(question.id(), answer);
        self.index = self.index.saturating_add(1);
        self.skip_answered();
        Ok(self.current().map_or(Step::Ready, Step::Ask))
    }

    /// Whether every question has been answered.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current().is_none()
    }

    /// Zero-based position of the cursor and the total question count.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.index, QUESTIONNAIRE.len())
    }

    /// Completion in whole percent.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "progress is reported in whole percent"
    )]
    pub fn progress_percent(&self) -> usize {
        let (answered, total) = self.position();
        answered.min(total).saturating_mul(100) / total
    }

    /// Answers collected so far.
    #[must_use]
    pub const fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    /// Finish the consultation and return the collected answers.
    #[must_use]
    pub fn into_record(self) -> PreferenceRecord {
        self.record
    }

    fn skip_answered(&mut self) {
        while let Some(question) = self.current()
            && self.record.is_answered(question.id())
        {
            self.index = self.index.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn flavors() -> &'static Question {
        QUESTIONNAIRE
            .iter()
            .find(|q| q.id() == QuestionId::Flavors)
            .unwrap_or_else(|| panic!("flavors question must exist"))
    }

    #[fixture]
    fn budget() -> &'static Question {
        QUESTIONNAIRE
            .iter()
            .find(|q| q.id() == QuestionId::Budget)
            .unwrap_or_else(|| panic!("budget question must exist"))
    }

    #[rstest]
    fn questionnaire_ids_are_unique() {
        let mut ids: Vec<_> = QUESTIONNAIRE.iter().map(Question::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONNAIRE.len());
    }

    #[rstest]
    fn only_flavors_allow_multiple() {
        let multi: Vec<_> = QUESTIONNAIRE
            .iter()
            .filter(|q| q.allows_multiple())
            .map(Question::id)
            .collect();
        assert_eq!(multi, vec![QuestionId::Flavors]);
    }

    #[rstest]
    fn select_maps_one_based_choices(flavors: &'static Question) {
        let answer = flavors.select(&[1, 3]).expect("valid choices");
        assert_eq!(
            answer,
            Answer::Multiple(vec!["Fruity/Tangy".to_owned(), "Floral/Delicate".to_owned()])
        );
    }

    #[rstest]
    fn empty_multi_selection_is_allowed(flavors: &'static Question) {
        assert_eq!(flavors.select(&[]), Ok(Answer::Multiple(Vec::new())));
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn select_rejects_out_of_range(budget: &'static Question, #[case] choice: usize) {
        let err = budget.select(&[choice]).expect_err("choice out of range");
        assert_eq!(
            err,
            ConsultationError::OptionOutOfRange {
                question: QuestionId::Budget,
                choice,
                available: 4,
            }
        );
    }

    #[rstest]
    fn single_choice_rejects_several(budget: &'static Question) {
        let err = budget.select(&[1, 2]).expect_err("single choice only");
        assert!(matches!(err, ConsultationError::MultipleNotAllowed { .. }));
    }

    #[rstest]
    fn single_choice_requires_one(budget: &'static Question) {
        let err = budget.select(&[]).expect_err("a choice is required");
        assert!(matches!(err, ConsultationError::EmptySelection { .. }));
    }

    #[rstest]
    fn answers_advance_one_question_at_a_time() {
        let mut consultation = Consultation::new();
        assert_eq!(consultation.position(), (0, 7));
        let step = consultation
            .answer(Answer::from("Beginner"))
            .expect("first answer");
        assert!(matches!(step, Step::Ask(q) if q.id() == QuestionId::Type));
        assert_eq!(consultation.position(), (1, 7));
        assert_eq!(consultation.progress_percent(), 14);
    }

    #[rstest]
    fn final_answer_reports_ready() {
        let mut consultation = Consultation::new();
        let mut last = None;
        for _ in 0..QUESTIONNAIRE.len() {
            last = Some(
                consultation
                    .answer(Answer::from(NO_PREFERENCE))
                    .expect("question pending"),
            );
        }
        assert_eq!(last, Some(Step::Ready));
        assert!(consultation.is_ready());
        assert_eq!(consultation.progress_percent(), 100);
        assert_eq!(
            consultation.answer(Answer::from("late")),
            Err(ConsultationError::Complete)
        );
    }

    #[rstest]
    fn known_answers_are_skipped_mid_sequence() {
        let known = PreferenceRecord::new()
            .with_answer(QuestionId::Flavors, vec!["Fruity/Tangy".to_owned()])
            .with_answer(QuestionId::Origin, "Africa");
        let mut consultation = Consultation::with_known(known);
        assert_eq!(consultation.current().map(Question::id), Some(QuestionId::Experience));
        consultation.answer(Answer::from("Expert")).expect("experience");
        let step = consultation.answer(Answer::from("Milk")).expect("type");
        assert!(matches!(step, Step::Ask(q) if q.id() == QuestionId::Occasion));
        assert_eq!(consultation.record().single(QuestionId::Origin), Some("Africa"));
    }

    #[rstest]
    fn fully_known_record_is_ready_immediately() {
        let consultation = Consultation::with_known(PreferenceRecord::indifferent());
        assert!(consultation.is_ready());
    }
}
