//! Test-only fixtures: a small curated catalog and a trivial scorer.

use crate::{
    Catalog, CatalogMetadata, ChocolateItem, ChocolateType, PreferenceRecord, PriceTier, Scorer,
};

fn item(
    (id, name, brand): (&str, &str, &str),
    origin: &str,
    (kind, cocoa): (ChocolateType, u8),
    notes: &[&str],
    (rating, tier): (f32, PriceTier),
    description: &str,
) -> ChocolateItem {
    ChocolateItem::new(id, name, brand, kind)
        .with_origin(origin)
        .with_cocoa_percentage(cocoa)
        .with_flavor_notes(notes.iter().copied())
        .with_rating(rating)
        .with_price_range(tier)
        .with_description(description)
}

/// The eight hand-curated chocolates used across tests and documentation.
#[must_use]
pub fn sample_items() -> Vec<ChocolateItem> {
    use ChocolateType::{Dark, Milk, Ruby};
    vec![
        item(
            ("1", "Piura Select 70%", "Cacaosuyo"),
            "Peru",
            (Dark, 70),
            &["fruity", "floral", "caramel"],
            (4.5, PriceTier::PREMIUM),
            "An exceptional chocolate from Peru with intense fruity notes",
        ),
        item(
            ("2", "Madagascar 65%", "Valrhona"),
            "Madagascar",
            (Dark, 65),
            &["fruity", "tangy", "red berries"],
            (4.3, PriceTier::MODERATE),
            "Characteristic red fruit notes from Madagascar",
        ),
        item(
            ("3", "Ecuador 72%", "Pacari"),
            "Ecuador",
            (Dark, 72),
            &["floral", "jasmine", "honey"],
            (4.6, PriceTier::PREMIUM),
            "Intense floral profile with jasmine notes",
        ),
        item(
            ("4", "Ghana 68%", "Divine"),
            "Ghana",
            (Dark, 68),
            &["classic", "cocoa", "woody"],
            (4.0, PriceTier::BUDGET),
            "Classic chocolate profile, pure cocoa notes",
        ),
        item(
            ("5", "Venezuela 75%", "Amedei"),
            "Venezuela",
            (Dark, 75),
            &["nutty", "tobacco", "leather"],
            (4.7, PriceTier::LUXURY),
            "Complex and sophisticated with earthy undertones",
        ),
        item(
            ("6", "Milk Hazelnut 40%", "Lindt"),
            "Blend",
            (Milk, 40),
            &["creamy", "nutty", "sweet"],
            (4.2, PriceTier::MODERATE),
            "Smooth milk chocolate with roasted hazelnuts",
        ),
        item(
            ("7", "Tanzania 70%", "Original Beans"),
            "Tanzania",
            (Dark, 70),
            &["citrus", "tropical fruit", "bright"],
            (4.4, PriceTier::PREMIUM),
            "Bright and lively with citrus notes",
        ),
        item(
            ("8", "Ruby Cacao 47%", "Callebaut"),
            "Brazil",
            (Ruby, 47),
            &["berry", "tart", "fruity"],
            (4.1, PriceTier::PREMIUM),
            "Natural pink chocolate with berry notes",
        ),
    ]
}

/// [`sample_items`] wrapped in a [`Catalog`].
#[must_use]
pub fn sample_catalog() -> Catalog {
    let items = sample_items();
    let metadata = CatalogMetadata::describe("curated sample", "2025-01-01", &items);
    Catalog::new(metadata, items)
}

/// Test `Scorer` mapping the item rating linearly onto `0..=100`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RatingScorer;

impl Scorer for RatingScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "linear rescaling of the rating"
    )]
    fn score(&self, item: &ChocolateItem, _preferences: &PreferenceRecord) -> u8 {
        Self::sanitise(item.rating_or_zero() * 20.0)
    }
}
