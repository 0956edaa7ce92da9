//! Weighted preference scoring.
//!
//! Each item is compared with the visitor's answers along five independent
//! factors. Every factor yields a sub-score in `0.0..=100.0`; the match score
//! is their weighted sum, rounded and capped at 100. Missing item fields and
//! unanswered questions never fail: they fall back to the neutral or
//! no-match values listed on each helper below.

use log::debug;
use serde::Serialize;
use sommelier_core::{
    Answer, ChocolateItem, ChocolateType, PreferenceRecord, PriceTier, QuestionId, Scorer,
};

use crate::tables::{flavor_synonyms, region_origins};
use crate::{Factor, ScoreWeights, ScorerError};

const FULL_MATCH: f32 = 100.0_f32;
const NEUTRAL: f32 = 50.0_f32;
const NO_MATCH: f32 = 0.0_f32;
const TYPE_MISMATCH: f32 = 10.0_f32;
const OUTSIDE_COCOA_BAND: f32 = 80.0_f32;
const ORIGIN_MISMATCH: f32 = 20.0_f32;
const ONE_TIER_OVER: f32 = 60.0_f32;
const OVER_BUDGET: f32 = 20.0_f32;
const RATING_FLOOR: f32 = 1.0_f32;
const POINTS_PER_STAR: f32 = 25.0_f32;

/// Cocoa band named by the dark questionnaire options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DarkBand {
    Intense,
    Balanced,
}

impl DarkBand {
    fn named_in(answer: &str) -> Option<Self> {
        let lowered = answer.to_lowercase();
        if lowered.contains("intense") {
            Some(Self::Intense)
        } else if lowered.contains("balanced") {
            Some(Self::Balanced)
        } else {
            None
        }
    }

    fn contains(self, cocoa: u8) -> bool {
        match self {
            Self::Intense => (70..=100).contains(&cocoa),
            Self::Balanced => (50..=70).contains(&cocoa),
        }
    }
}

/// One factor's contribution to a match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScore {
    /// Factor being reported.
    pub factor: Factor,
    /// Sub-score in `0.0..=100.0`.
    pub score: f32,
    /// Weight applied to the sub-score.
    pub weight: f32,
}

impl FactorScore {
    #[expect(
        clippy::float_arithmetic,
        reason = "weighted contribution of a sub-score"
    )]
    fn contribution(self) -> f32 {
        self.score * self.weight
    }
}

/// Per-factor sub-scores and the resulting match score for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    total: u8,
    factors: [FactorScore; 5],
}

impl ScoreBreakdown {
    /// Final match score in `0..=100`.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Sub-scores in [`Factor::ALL`] order.
    #[must_use]
    pub const fn factors(&self) -> &[FactorScore; 5] {
        &self.factors
    }

    /// Sub-score for a single factor.
    #[must_use]
    pub fn get(&self, factor: Factor) -> Option<&FactorScore> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }
}

/// Scorer that compares an item with every answered preference.
///
/// # Examples
/// ```
/// use sommelier_core::{ChocolateItem, ChocolateType, PreferenceRecord, PriceTier, QuestionId, Scorer};
/// use sommelier_scorer::PreferenceScorer;
///
/// let item = ChocolateItem::new("1", "Piura 70%", "Cacaosuyo", ChocolateType::Dark)
///     .with_flavor_notes(["fruity", "floral"])
///     .with_rating(4.6)
///     .with_price_range(PriceTier::PREMIUM);
/// let prefs = PreferenceRecord::new()
///     .with_answer(QuestionId::Type, "Dark")
///     .with_answer(QuestionId::Flavors, vec!["Fruity".to_owned()])
///     .with_answer(QuestionId::Budget, "$$$$");
/// assert_eq!(PreferenceScorer::default().score(&item, &prefs), 91);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreferenceScorer {
    weights: ScoreWeights,
}

impl PreferenceScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScorerError`] when the weights fail validation.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score `item` and report every factor's contribution.
    #[must_use]
    pub fn breakdown(&self, item: &ChocolateItem, preferences: &PreferenceRecord) -> ScoreBreakdown {
        let factors = Factor::ALL.map(|factor| FactorScore {
            factor,
            score: sub_score(factor, item, preferences),
            weight: self.weights.get(factor),
        });
        let raw = factors.iter().copied().map(FactorScore::contribution).sum();
        ScoreBreakdown {
            total: Self::sanitise(raw),
            factors,
        }
    }
}

impl Scorer for PreferenceScorer {
    fn score(&self, item: &ChocolateItem, preferences: &PreferenceRecord) -> u8 {
        self.breakdown(item, preferences).total()
    }
}

fn sub_score(factor: Factor, item: &ChocolateItem, preferences: &PreferenceRecord) -> f32 {
    match factor {
        Factor::Rating => rating_score(item),
        Factor::Type => type_score(item, preferences),
        Factor::Flavor => flavor_score(item, preferences),
        Factor::Origin => origin_score(item, preferences),
        Factor::Budget => budget_score(item, preferences),
    }
}

fn first_preference(preferences: &PreferenceRecord, question: QuestionId) -> Option<&str> {
    preferences
        .get(question)
        .and_then(|answer| answer.preferences().into_iter().next())
}

/// `(rating - 1) * 25`, so 1.0 maps to 0 and 5.0 to 100. Unrated items get 0.
#[expect(
    clippy::float_arithmetic,
    reason = "linear rescaling of the rating"
)]
fn rating_score(item: &ChocolateItem) -> f32 {
    item.rating
        .filter(|rating| rating.is_finite())
        .map_or(NO_MATCH, |rating| {
            ((rating - RATING_FLOOR) * POINTS_PER_STAR).clamp(NO_MATCH, FULL_MATCH)
        })
}

fn type_score(item: &ChocolateItem, preferences: &PreferenceRecord) -> f32 {
    let Some(answer) = first_preference(preferences, QuestionId::Type) else {
        return NEUTRAL;
    };
    let Some(wanted) = ChocolateType::mentioned_in(answer) else {
        debug!("type answer '{answer}' names no chocolate type");
        return NEUTRAL;
    };
    if wanted != item.kind {
        return TYPE_MISMATCH;
    }
    match (DarkBand::named_in(answer), item.cocoa_percentage) {
        (Some(band), Some(cocoa)) if wanted == ChocolateType::Dark && !band.contains(cocoa) => {
            OUTSIDE_COCOA_BAND
        }
        _ => FULL_MATCH,
    }
}

fn flavor_score(item: &ChocolateItem, preferences: &PreferenceRecord) -> f32 {
    let wanted = preferences
        .get(QuestionId::Flavors)
        .map(Answer::preferences)
        .unwrap_or_default();
    if wanted.is_empty() {
        return NEUTRAL;
    }
    let notes: Vec<String> = item
        .flavor_notes
        .iter()
        .map(|note| note.trim().to_lowercase())
        .filter(|note| !note.is_empty())
        .collect();
    if notes.is_empty() {
        return NO_MATCH;
    }
    let matched = wanted.iter().filter(|tag| tag_matches(tag, &notes)).count();
    percentage(matched, wanted.len())
}

fn tag_matches(tag: &str, notes: &[String]) -> bool {
    let lowered = tag.trim().to_lowercase();
    let synonyms = flavor_synonyms(&lowered).unwrap_or_default();
    notes.iter().any(|note| {
        note.contains(lowered.as_str())
            || lowered.contains(note.as_str())
            || synonyms.iter().any(|synonym| note.contains(synonym))
    })
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "counts are bounded by the questionnaire's flavor options"
)]
fn percentage(matched: usize, requested: usize) -> f32 {
    if requested == 0 {
        return NO_MATCH;
    }
    matched as f32 / requested as f32 * FULL_MATCH
}

fn origin_score(item: &ChocolateItem, preferences: &PreferenceRecord) -> f32 {
    let Some(wanted) = first_preference(preferences, QuestionId::Origin) else {
        return NEUTRAL;
    };
    let Some(origin) = item
        .origin
        .as_deref()
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
    else {
        return ORIGIN_MISMATCH;
    };
    let lowered = origin.to_lowercase();
    let matches = region_origins(wanted).map_or_else(
        || lowered == wanted.trim().to_lowercase(),
        |members| {
            members
                .iter()
                .any(|member| lowered.contains(&member.to_lowercase()))
        },
    );
    if matches { FULL_MATCH } else { ORIGIN_MISMATCH }
}

fn budget_score(item: &ChocolateItem, preferences: &PreferenceRecord) -> f32 {
    let Some(answer) = first_preference(preferences, QuestionId::Budget) else {
        return NEUTRAL;
    };
    let budget = match answer.parse::<PriceTier>() {
        Ok(tier) => tier,
        Err(err) => {
            debug!("ignoring budget answer: {err}");
            return NEUTRAL;
        }
    };
    let Some(tier) = item.price_range else {
        return NO_MATCH;
    };
    match tier.tiers_above(budget) {
        0 => FULL_MATCH,
        1 => ONE_TIER_OVER,
        _ => OVER_BUDGET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sommelier_core::NO_PREFERENCE;

    #[fixture]
    fn scorer() -> PreferenceScorer {
        PreferenceScorer::default()
    }

    #[fixture]
    fn dark() -> ChocolateItem {
        ChocolateItem::new("d", "Piura 70%", "Cacaosuyo", ChocolateType::Dark)
            .with_origin("Peru")
            .with_cocoa_percentage(72)
            .with_flavor_notes(["fruity", "floral"])
            .with_rating(4.6)
            .with_price_range(PriceTier::PREMIUM)
    }

    fn factor(breakdown: &ScoreBreakdown, factor: Factor) -> f32 {
        breakdown.get(factor).map_or(f32::NAN, |entry| entry.score)
    }

    #[rstest]
    fn dark_item_beats_identical_milk_item(scorer: PreferenceScorer, dark: ChocolateItem) {
        let prefs = PreferenceRecord::new()
            .with_answer(QuestionId::Type, "Dark")
            .with_answer(QuestionId::Flavors, vec!["Fruity".to_owned()])
            .with_answer(QuestionId::Budget, "$$$$");
        let milk = ChocolateItem {
            kind: ChocolateType::Milk,
            ..dark.clone()
        };
        let dark_score = scorer.score(&dark, &prefs);
        let milk_score = scorer.score(&milk, &prefs);
        assert_eq!(dark_score, 91);
        assert!(dark_score > milk_score, "{dark_score} <= {milk_score}");
    }

    #[rstest]
    #[case(None, 0.0_f32)]
    #[case(Some(1.0_f32), 0.0_f32)]
    #[case(Some(3.0_f32), 50.0_f32)]
    #[case(Some(5.0_f32), 100.0_f32)]
    #[case(Some(0.5_f32), 0.0_f32)]
    fn rating_maps_linearly(#[case] rating: Option<f32>, #[case] expected: f32) {
        let item = ChocolateItem {
            rating,
            ..ChocolateItem::new("r", "R", "B", ChocolateType::Dark)
        };
        assert!((rating_score(&item) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case("Dark intense (>70%)", 100.0_f32)]
    #[case("Dark balanced (50-70%)", 80.0_f32)]
    #[case("Milk", 10.0_f32)]
    #[case(NO_PREFERENCE, 50.0_f32)]
    #[case("Something sweet", 50.0_f32)]
    fn type_respects_cocoa_band(
        scorer: PreferenceScorer,
        dark: ChocolateItem,
        #[case] answer: &str,
        #[case] expected: f32,
    ) {
        let prefs = PreferenceRecord::new().with_answer(QuestionId::Type, answer);
        let breakdown = scorer.breakdown(&dark, &prefs);
        assert!((factor(&breakdown, Factor::Type) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(&["Fruity/Tangy"], 100.0_f32)]
    #[case(&["Fruity/Tangy", "Spicy/Complex"], 50.0_f32)]
    #[case(&["Nutty/Creamy"], 0.0_f32)]
    #[case(&["flor"], 100.0_f32)]
    #[case(&[NO_PREFERENCE], 50.0_f32)]
    #[case(&[], 50.0_f32)]
    fn flavor_counts_matched_tags(
        dark: ChocolateItem,
        #[case] tags: &[&str],
        #[case] expected: f32,
    ) {
        let prefs = PreferenceRecord::new().with_answer(
            QuestionId::Flavors,
            tags.iter().map(|tag| (*tag).to_owned()).collect::<Vec<_>>(),
        );
        assert!((flavor_score(&dark, &prefs) - expected).abs() < 1e-3);
    }

    #[rstest]
    fn flavor_without_notes_scores_zero(dark: ChocolateItem) {
        let bare = ChocolateItem {
            flavor_notes: Vec::new(),
            ..dark
        };
        let prefs = PreferenceRecord::new()
            .with_answer(QuestionId::Flavors, vec!["Fruity/Tangy".to_owned()]);
        assert!(flavor_score(&bare, &prefs).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case("South America", Some("Peru"), 100.0_f32)]
    #[case("Africa", Some("Peru"), 20.0_f32)]
    #[case("Africa", None, 20.0_f32)]
    #[case("Peru", Some("peru"), 100.0_f32)]
    #[case(NO_PREFERENCE, None, 50.0_f32)]
    fn origin_uses_region_table(
        dark: ChocolateItem,
        #[case] region: &str,
        #[case] origin: Option<&str>,
        #[case] expected: f32,
    ) {
        let item = ChocolateItem {
            origin: origin.map(str::to_owned),
            ..dark
        };
        let prefs = PreferenceRecord::new().with_answer(QuestionId::Origin, region);
        assert!((origin_score(&item, &prefs) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case("$$$ ($10-20)", Some(PriceTier::PREMIUM), 100.0_f32)]
    #[case("$$ ($5-10)", Some(PriceTier::PREMIUM), 60.0_f32)]
    #[case("$ (under $5)", Some(PriceTier::PREMIUM), 20.0_f32)]
    #[case("$$", None, 0.0_f32)]
    #[case(NO_PREFERENCE, Some(PriceTier::LUXURY), 50.0_f32)]
    fn budget_compares_tiers(
        dark: ChocolateItem,
        #[case] budget: &str,
        #[case] tier: Option<PriceTier>,
        #[case] expected: f32,
    ) {
        let item = ChocolateItem {
            price_range: tier,
            ..dark
        };
        let prefs = PreferenceRecord::new().with_answer(QuestionId::Budget, budget);
        assert!((budget_score(&item, &prefs) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(2.5_f32, 46)]
    #[case(3.0_f32, 50)]
    #[case(5.0_f32, 65)]
    fn indifferent_record_stays_mid_range(
        scorer: PreferenceScorer,
        dark: ChocolateItem,
        #[case] rating: f32,
        #[case] expected: u8,
    ) {
        let item = dark.with_rating(rating);
        let score = scorer.score(&item, &PreferenceRecord::indifferent());
        assert_eq!(score, expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(1.0_f32))]
    fn indifferent_record_floors_at_unweighted_neutral(
        scorer: PreferenceScorer,
        dark: ChocolateItem,
        #[case] rating: Option<f32>,
    ) {
        let item = ChocolateItem { rating, ..dark };
        let breakdown = scorer.breakdown(&item, &PreferenceRecord::indifferent());
        assert!(factor(&breakdown, Factor::Rating).abs() < f32::EPSILON);
        assert_eq!(breakdown.total(), 35);
    }

    #[rstest]
    fn breakdown_reports_weights(scorer: PreferenceScorer, dark: ChocolateItem) {
        let breakdown = scorer.breakdown(&dark, &PreferenceRecord::new());
        let weights: Vec<f32> = breakdown.factors().iter().map(|f| f.weight).collect();
        assert_eq!(weights, vec![0.30_f32, 0.25_f32, 0.25_f32, 0.12_f32, 0.08_f32]);
    }
}
