//! Ranking, diversity selection and the recommendation response.

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;
use sommelier_core::{ChocolateItem, PreferenceRecord};

use crate::{FactorScore, PreferenceScorer, ScoreBreakdown};

/// Version tag reported with every response.
pub const ALGORITHM_VERSION: &str = "2.0";

/// Shortlist length used when callers do not choose one.
pub const DEFAULT_LIMIT: usize = 3;

/// Tuning for [`PreferenceScorer::recommend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Maximum number of recommendations returned.
    pub limit: usize,
    /// Items scoring below this value are dropped.
    pub min_score: u8,
    /// Apply the brand/origin diversity pass.
    pub diversity: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: 0,
            diversity: true,
        }
    }
}

/// A scored catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// The item being recommended.
    #[serde(flatten)]
    pub item: &'a ChocolateItem,
    /// Match score in `0..=100`.
    pub match_score: u8,
    /// Contribution of every factor.
    pub scoring_details: [FactorScore; 5],
}

impl<'a> Recommendation<'a> {
    fn new(item: &'a ChocolateItem, breakdown: ScoreBreakdown) -> Self {
        Self {
            item,
            match_score: breakdown.total(),
            scoring_details: *breakdown.factors(),
        }
    }
}

/// Outcome reported alongside the recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// At least one item was recommended.
    Success,
    /// Nothing reached the minimum score, or the catalog was empty.
    NoMatches,
}

/// The shortlist returned for one preference record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet<'a> {
    status: Status,
    recommendations: Vec<Recommendation<'a>>,
    total_analyzed: usize,
    algorithm_version: &'static str,
}

impl<'a> RecommendationSet<'a> {
    /// Wrap a shortlist drawn from `total_analyzed` catalog items.
    #[must_use]
    pub fn new(recommendations: Vec<Recommendation<'a>>, total_analyzed: usize) -> Self {
        let status = if recommendations.is_empty() {
            Status::NoMatches
        } else {
            Status::Success
        };
        Self {
            status,
            recommendations,
            total_analyzed,
            algorithm_version: ALGORITHM_VERSION,
        }
    }

    /// Whether anything was recommended.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Recommendations, best first.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation<'a>] {
        &self.recommendations
    }

    /// Number of catalog items scored.
    #[must_use]
    pub const fn total_analyzed(&self) -> usize {
        self.total_analyzed
    }

    /// Report whether the shortlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Sort by descending score, then descending rating.
///
/// The sort is stable, so items tied on both keep their catalog order.
/// Unrated items sort as `0.0`.
pub fn sort_ranked(ranked: &mut [Recommendation<'_>]) {
    ranked.sort_by(|a, b| {
        b.match_score.cmp(&a.match_score).then_with(|| {
            b.item
                .rating_or_zero()
                .total_cmp(&a.item.rating_or_zero())
        })
    });
}

/// Pick at most `limit` items from a ranked list, preferring variety.
///
/// The top item is always first. Each later item is accepted when its origin
/// or its brand has not been used yet; items passed over back-fill the list
/// in rank order when fewer than `limit` were accepted.
#[must_use]
pub fn diversify(ranked: Vec<Recommendation<'_>>, limit: usize) -> Vec<Recommendation<'_>> {
    let mut chosen = Vec::with_capacity(limit.min(ranked.len()));
    let mut passed_over = Vec::new();
    let mut origins = BTreeSet::new();
    let mut brands = BTreeSet::new();
    for candidate in ranked {
        if chosen.len() >= limit {
            break;
        }
        let item = candidate.item;
        let origin = item.origin.as_deref();
        let brand = item.brand.as_str();
        if chosen.is_empty() || !origins.contains(&origin) || !brands.contains(brand) {
            origins.insert(origin);
            brands.insert(brand);
            chosen.push(candidate);
        } else {
            passed_over.push(candidate);
        }
    }
    let missing = limit.saturating_sub(chosen.len());
    chosen.extend(passed_over.into_iter().take(missing));
    chosen
}

impl PreferenceScorer {
    /// Score every item and return them in ranked order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        items: &'a [ChocolateItem],
        preferences: &PreferenceRecord,
    ) -> Vec<Recommendation<'a>> {
        let mut ranked: Vec<_> = items
            .iter()
            .map(|item| Recommendation::new(item, self.breakdown(item, preferences)))
            .collect();
        sort_ranked(&mut ranked);
        ranked
    }

    /// Build the shortlist for `preferences`.
    ///
    /// # Examples
    /// ```
    /// use sommelier_core::{PreferenceRecord, QuestionId, test_support::sample_catalog};
    /// use sommelier_scorer::{PreferenceScorer, RecommendOptions, Status};
    ///
    /// let catalog = sample_catalog();
    /// let prefs = PreferenceRecord::new().with_answer(QuestionId::Origin, "Africa");
    /// let set = PreferenceScorer::default().recommend(catalog.items(), &prefs, RecommendOptions::default());
    /// assert_eq!(set.status(), Status::Success);
    /// assert_eq!(set.recommendations().len(), 3);
    /// assert_eq!(set.total_analyzed(), 8);
    /// ```
    #[must_use]
    pub fn recommend<'a>(
        &self,
        items: &'a [ChocolateItem],
        preferences: &PreferenceRecord,
        options: RecommendOptions,
    ) -> RecommendationSet<'a> {
        let mut ranked = self.rank(items, preferences);
        ranked.retain(|candidate| candidate.match_score >= options.min_score);
        debug!(
            "{} of {} items reach the minimum score {}",
            ranked.len(),
            items.len(),
            options.min_score
        );
        let shortlist = if options.diversity {
            diversify(ranked, options.limit)
        } else {
            ranked.truncate(options.limit);
            ranked
        };
        RecommendationSet::new(shortlist, items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sommelier_core::test_support::sample_items;
    use sommelier_core::{ChocolateType, NO_PREFERENCE, QuestionId};

    #[fixture]
    fn items() -> Vec<ChocolateItem> {
        sample_items()
    }

    fn ids<'a>(ranked: &'a [Recommendation<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|entry| entry.item.id.as_str()).collect()
    }

    fn tied(id: &str, brand: &str, origin: &str, rating: f32) -> ChocolateItem {
        ChocolateItem::new(id, id, brand, ChocolateType::Dark)
            .with_origin(origin)
            .with_rating(rating)
    }

    #[rstest]
    fn ties_break_on_rating_then_catalog_order() {
        let items = vec![
            tied("a", "A", "Peru", 4.0),
            tied("b", "B", "Peru", 4.0),
            tied("c", "C", "Peru", 4.0),
        ];
        // Equal scores from a flat record; rating decides, then order.
        let scorer = PreferenceScorer::default();
        let ranked = scorer.rank(&items, &PreferenceRecord::new());
        assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn higher_rating_wins_a_score_tie() {
        let items = vec![tied("low", "A", "Peru", 4.02), tied("high", "B", "Peru", 4.03)];
        let scorer = PreferenceScorer::default();
        let ranked = scorer.rank(&items, &PreferenceRecord::new());
        assert_eq!(ranked.first().map(|r| r.match_score), ranked.get(1).map(|r| r.match_score));
        assert_eq!(ids(&ranked), vec!["high", "low"]);
    }

    #[rstest]
    fn diversity_skips_repeated_brand_and_origin() {
        let items = vec![
            tied("a", "Valrhona", "Peru", 5.0),
            tied("b", "Valrhona", "Peru", 4.9),
            tied("c", "Pacari", "Ecuador", 4.0),
            tied("d", "Amedei", "Ghana", 3.0),
        ];
        let scorer = PreferenceScorer::default();
        let ranked = scorer.rank(&items, &PreferenceRecord::new());
        let picked = diversify(ranked, 3);
        assert_eq!(ids(&picked), vec!["a", "c", "d"]);
    }

    #[rstest]
    fn diversity_back_fills_when_variety_runs_out() {
        let items = vec![
            tied("a", "Valrhona", "Peru", 5.0),
            tied("b", "Valrhona", "Peru", 4.9),
            tied("c", "Valrhona", "Peru", 4.8),
        ];
        let scorer = PreferenceScorer::default();
        let picked = diversify(scorer.rank(&items, &PreferenceRecord::new()), 3);
        assert_eq!(ids(&picked), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn min_score_can_empty_the_shortlist(items: Vec<ChocolateItem>) {
        let options = RecommendOptions {
            min_score: 100,
            ..RecommendOptions::default()
        };
        let set = PreferenceScorer::default().recommend(&items, &PreferenceRecord::new(), options);
        assert_eq!(set.status(), Status::NoMatches);
        assert!(set.is_empty());
        assert_eq!(set.total_analyzed(), 8);
    }

    #[rstest]
    fn empty_catalog_reports_no_matches() {
        let set = PreferenceScorer::default().recommend(
            &[],
            &PreferenceRecord::indifferent(),
            RecommendOptions::default(),
        );
        assert_eq!(set.status(), Status::NoMatches);
        assert_eq!(set.total_analyzed(), 0);
    }

    #[rstest]
    fn without_diversity_the_top_scores_are_kept(items: Vec<ChocolateItem>) {
        let prefs = PreferenceRecord::new().with_answer(QuestionId::Type, NO_PREFERENCE);
        let scorer = PreferenceScorer::default();
        let options = RecommendOptions {
            limit: 4,
            diversity: false,
            ..RecommendOptions::default()
        };
        let set = scorer.recommend(&items, &prefs, options);
        let expected: Vec<_> = scorer.rank(&items, &prefs).into_iter().take(4).collect();
        assert_eq!(set.recommendations(), expected.as_slice());
    }

    #[rstest]
    fn response_serialises_flat_items(items: Vec<ChocolateItem>) {
        let prefs = PreferenceRecord::new()
            .with_answer(QuestionId::Type, "Dark intense (>70%)")
            .with_answer(QuestionId::Flavors, vec!["Floral/Delicate".to_owned()]);
        let set = PreferenceScorer::default().recommend(&items, &prefs, RecommendOptions::default());
        let json = serde_json::to_value(&set).expect("encode response");
        assert_eq!(json["status"], "success");
        assert_eq!(json["algorithm_version"], ALGORITHM_VERSION);
        assert_eq!(json["total_analyzed"], 8);
        let first = &json["recommendations"][0];
        assert_eq!(first["id"], "3");
        assert_eq!(first["type"], "dark");
        assert!(first["match_score"].is_u64());
        assert_eq!(first["scoring_details"][2]["factor"], "flavor");
    }
}
