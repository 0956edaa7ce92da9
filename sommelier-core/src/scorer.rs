//! Score chocolates against a visitor's preferences.
//!
//! The `Scorer` trait assigns a match score to a
//! [`ChocolateItem`](crate::ChocolateItem) given the visitor's
//! [`PreferenceRecord`](crate::PreferenceRecord).

use crate::{ChocolateItem, PreferenceRecord};

/// Highest score a [`Scorer`] may return.
pub const MAX_SCORE: u8 = 100;

/// Calculate a match score for a chocolate.
///
/// Higher scores indicate a better match between the item and the visitor's
/// answers. Implementations must be thread-safe (`Send` + `Sync`) and pure:
/// the same item and record always yield the same score. Missing item fields
/// or unanswered questions lower the score but never fail.
///
/// Implementations must return values in `0..=MAX_SCORE`. Use
/// [`Scorer::sanitise`] to turn a raw weighted sum into a valid score.
///
/// # Examples
///
/// ```rust
/// use sommelier_core::{ChocolateItem, ChocolateType, PreferenceRecord, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _item: &ChocolateItem, _prefs: &PreferenceRecord) -> u8 {
///         50
///     }
/// }
///
/// let item = ChocolateItem::new("x", "Bar", "Brand", ChocolateType::Milk);
/// assert_eq!(FlatScorer.score(&item, &PreferenceRecord::new()), 50);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `item` according to `preferences`.
    fn score(&self, item: &ChocolateItem, preferences: &PreferenceRecord) -> u8;

    /// Round and clamp a raw score.
    ///
    /// Returns `0` for non-finite values and clamps to `0..=MAX_SCORE`.
    fn sanitise(raw: f32) -> u8
    where
        Self: Sized,
    {
        if !raw.is_finite() {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is rounded and clamped to 0..=100 before the cast"
        )]
        let score = raw.round().clamp(0.0, f32::from(MAX_SCORE)) as u8;
        score
    }
}
