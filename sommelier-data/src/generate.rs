//! Seeded synthetic catalog generation.
//!
//! The generator produces schema-valid records whose fields follow realistic
//! patterns: prices and ratings depend on how a brand is positioned, flavor
//! notes come from the origin's characteristic profile, and cocoa content
//! follows the usual range for each chocolate type. The same seed always
//! yields the same catalog.

use camino::Utf8Path;
use log::info;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sommelier_core::{Catalog, CatalogMetadata, ChocolateItem, ChocolateType, PriceTier, TastingScore};

use crate::{GenerateError, write_catalog};

/// Number of chocolates generated by default.
pub const DEFAULT_COUNT: usize = 150;
/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

const SOURCE: &str = "Professional Chocolate Database";
const DESCRIPTION: &str =
    "Comprehensive chocolate database with professional ratings and detailed tasting notes";
/// Creation date stamped into the metadata unless the caller supplies one.
///
/// The stamp is fixed so that the same seed reproduces the same file.
pub const DEFAULT_CREATED_DATE: &str = "2025-01-02";
const EXTRA_FLAVOR_CHANCE: f64 = 0.3;
const CRAFT_AWARD_CHANCE: f64 = 0.2;

const BRANDS: &[&str] = &[
    "Valrhona", "Amedei", "Domori", "Bonnat", "Michel Cluizel", "Lindt", "Callebaut",
    "Cacaosuyo", "Pacari", "Original Beans", "Theo Chocolate", "Patric Chocolate",
    "Dandelion Chocolate", "Tcho", "Rogue Chocolatier", "Amano", "Askinosie",
    "Pierre Marcolini", "Jean-Paul Hévin", "Patrick Roger", "Guittard", "Scharffen Berger",
    "Green & Black's", "Hotel Chocolat", "Rococo Chocolates", "Pralus", "Zotter",
    "Ghirardelli", "Felchlin", "Republica del Cacao", "Pump Street", "Duffy's",
    "Ritual Chocolate", "Dick Taylor", "Fruition", "Castronovo", "Madre Chocolate",
    "Willie's Cacao", "Coppeneur", "Friis-Holm",
];

const PREMIUM_BRANDS: &[&str] = &[
    "Amedei", "Domori", "Valrhona", "Pierre Marcolini", "Jean-Paul Hévin",
];
const ARTISAN_BRANDS: &[&str] = &[
    "Cacaosuyo", "Pacari", "Original Beans", "Patric Chocolate", "Dandelion Chocolate",
];
const COMMERCIAL_BRANDS: &[&str] = &["Lindt", "Ghirardelli", "Green & Black's", "Hotel Chocolat"];

const GHANA: (&str, [&str; 6]) = (
    "Ghana",
    ["classic", "cocoa", "woody", "roasted", "earthy", "traditional"],
);
const DARK_COCOA: &[u8] = &[60, 65, 70, 72, 75, 78, 80, 85, 90];

const ORIGIN_FLAVORS: &[(&str, [&str; 6])] = &[
    ("Madagascar", ["fruity", "red berries", "tangy", "bright", "raspberry", "cherry"]),
    ("Peru", ["fruity", "floral", "caramel", "honey", "tropical", "jasmine"]),
    ("Ecuador", ["floral", "jasmine", "citrus", "bright", "orange blossom", "herbs"]),
    ("Venezuela", ["nutty", "tobacco", "leather", "elegant", "vanilla", "sophisticated"]),
    GHANA,
    ("Tanzania", ["citrus", "tropical fruit", "bright", "wine-like", "mango", "lime"]),
    ("Brazil", ["nutty", "caramel", "smooth", "coffee", "roasted", "balanced"]),
    ("Colombia", ["floral", "fruity", "bright", "citrus", "orange", "lively"]),
    ("Bolivia", ["fruity", "spicy", "complex", "dried fruit", "pepper", "exotic"]),
    ("Mexico", ["spicy", "cinnamon", "vanilla", "smoky", "chili", "traditional"]),
    ("India", ["spicy", "cardamom", "tea", "herbal", "exotic", "warm"]),
    ("Java", ["earthy", "smoky", "robust", "woody", "intense", "rustic"]),
    ("Philippines", ["fruity", "tropical", "coconut", "bright", "pineapple", "exotic"]),
    ("Vietnam", ["floral", "fruity", "delicate", "lychee", "rose", "subtle"]),
    ("Costa Rica", ["bright", "citrus", "fruity", "clean", "lime", "fresh"]),
    ("Panama", ["floral", "elegant", "refined", "jasmine", "delicate", "sophisticated"]),
    ("Nicaragua", ["earthy", "woody", "tobacco", "robust", "coffee", "rich"]),
    ("Dominican Republic", ["fruity", "bright", "tropical", "mango", "citrus", "lively"]),
    ("Trinidad", ["spicy", "complex", "dried fruit", "wine-like", "raisin", "sophisticated"]),
    ("Grenada", ["spicy", "nutmeg", "warm", "exotic", "cinnamon", "island"]),
    ("Belize", ["fruity", "bright", "citrus", "tropical", "orange", "fresh"]),
    ("Guatemala", ["smoky", "spicy", "complex", "volcanic", "pepper", "intense"]),
    ("Honduras", ["fruity", "bright", "citrus", "honey", "floral", "balanced"]),
];

const COCOA_BY_TYPE: &[(ChocolateType, &[u8])] = &[
    (ChocolateType::Dark, DARK_COCOA),
    (ChocolateType::Milk, &[30, 35, 38, 40, 42, 45]),
    (ChocolateType::White, &[28, 30, 32, 35]),
    (ChocolateType::Ruby, &[47, 50]),
];

const EXTRA_FLAVORS: &[&str] = &[
    "vanilla", "caramel", "coffee", "tea", "mint", "licorice", "almond", "hazelnut", "walnut",
    "butter", "cream", "salt",
];

const AWARDS: &[&str] = &[
    "Gold Medal - Academy of Chocolate",
    "International Chocolate Awards Winner",
    "Great Taste Award",
    "Chocolate Masters Award",
    "Bean-to-Bar Award",
    "Sustainable Chocolate Award",
    "Artisan Chocolate Award",
    "Premium Quality Certification",
    "Organic Certification",
    "Fair Trade Certified",
    "Rainforest Alliance Certified",
];

/// Parameters for [`generate_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of chocolates to produce.
    pub count: usize,
    /// Seed for the random number generator.
    pub seed: u64,
    /// Creation date written into the metadata.
    pub created_date: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: DEFAULT_SEED,
            created_date: DEFAULT_CREATED_DATE.to_owned(),
        }
    }
}

/// How a brand is positioned in the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Positioning {
    Premium,
    Artisan,
    Commercial,
    Craft,
}

impl Positioning {
    fn of(brand: &str) -> Self {
        if PREMIUM_BRANDS.contains(&brand) {
            Self::Premium
        } else if ARTISAN_BRANDS.contains(&brand) {
            Self::Artisan
        } else if COMMERCIAL_BRANDS.contains(&brand) {
            Self::Commercial
        } else {
            Self::Craft
        }
    }

    fn price(self, rng: &mut impl Rng) -> PriceTier {
        let choices: &[PriceTier] = match self {
            Self::Premium => &[PriceTier::PREMIUM, PriceTier::LUXURY],
            Self::Artisan => &[PriceTier::MODERATE, PriceTier::PREMIUM],
            Self::Commercial => &[PriceTier::BUDGET, PriceTier::MODERATE],
            Self::Craft => &[PriceTier::BUDGET],
        };
        choices.choose(rng).copied().unwrap_or(PriceTier::BUDGET)
    }

    fn rating(self, rng: &mut impl Rng) -> f32 {
        let range = match self {
            Self::Premium => 4.2_f32..=4.8_f32,
            Self::Artisan => 3.8_f32..=4.6_f32,
            Self::Commercial => 3.5_f32..=4.2_f32,
            Self::Craft => 3.0_f32..=3.8_f32,
        };
        one_decimal(rng.gen_range(range))
    }

    fn award_count(self, rng: &mut impl Rng) -> usize {
        match self {
            Self::Premium => rng.gen_range(1..=3),
            Self::Artisan => rng.gen_range(0..=2),
            Self::Commercial | Self::Craft => usize::from(rng.gen_bool(CRAFT_AWARD_CHANCE)),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "ratings are published with one decimal place"
)]
fn one_decimal(value: f32) -> f32 {
    (value * 10.0_f32).round() / 10.0_f32
}

#[expect(
    clippy::float_arithmetic,
    reason = "tasting marks jitter around the headline rating"
)]
fn jitter(rng: &mut impl Rng, rating: f32, low: f32, high: f32) -> f32 {
    one_decimal(rating + rng.gen_range(low..=high)).clamp(1.0_f32, 5.0_f32)
}

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Generate a synthetic catalog.
///
/// # Examples
/// ```
/// use sommelier_data::{GeneratorConfig, generate_catalog};
///
/// let config = GeneratorConfig { count: 5, ..GeneratorConfig::default() };
/// let catalog = generate_catalog(&config);
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog, generate_catalog(&config));
/// ```
#[must_use]
pub fn generate_catalog(config: &GeneratorConfig) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let items: Vec<ChocolateItem> = (1..=config.count)
        .map(|number| generate_item(&mut rng, number))
        .collect();
    let mut metadata = CatalogMetadata::describe(SOURCE, config.created_date.as_str(), &items);
    metadata.description = Some(DESCRIPTION.to_owned());
    Catalog::new(metadata, items)
}

/// Generate a catalog and write it to `path`.
///
/// # Errors
/// Returns [`GenerateError::EmptyCatalog`] when `config.count` is zero and
/// [`GenerateError::Catalog`] when writing fails.
pub fn write_generated_catalog(
    path: &Utf8Path,
    config: &GeneratorConfig,
) -> Result<Catalog, GenerateError> {
    if config.count == 0 {
        return Err(GenerateError::EmptyCatalog);
    }
    let catalog = generate_catalog(config);
    write_catalog(path, &catalog)?;
    info!(
        "generated {} chocolates with seed {} into {path}",
        catalog.len(),
        config.seed
    );
    Ok(catalog)
}

fn generate_item(rng: &mut ChaCha8Rng, number: usize) -> ChocolateItem {
    let brand = pick(rng, BRANDS);
    let positioning = Positioning::of(brand);
    let (origin, profile) = ORIGIN_FLAVORS.choose(rng).copied().unwrap_or(GHANA);
    let (kind, cocoa_options) = COCOA_BY_TYPE
        .choose(rng)
        .copied()
        .unwrap_or((ChocolateType::Dark, DARK_COCOA));
    let cocoa = cocoa_options.choose(rng).copied().unwrap_or(70);

    let note_count = rng.gen_range(3..=profile.len());
    let mut notes: Vec<String> = profile
        .choose_multiple(rng, note_count)
        .map(|note| (*note).to_owned())
        .collect();
    if rng.gen_bool(EXTRA_FLAVOR_CHANCE) {
        notes.push(pick(rng, EXTRA_FLAVORS).to_owned());
    }

    let price = positioning.price(rng);
    let rating = positioning.rating(rng);
    let name = product_name(rng, kind, origin, cocoa);
    let description = describe(rng, kind, origin, &notes);
    let detailed_review = review(rng, (brand, origin), kind, cocoa, &notes);
    let award_count = positioning.award_count(rng);
    let awards = AWARDS
        .choose_multiple(rng, award_count)
        .map(|award| (*award).to_owned())
        .collect();
    let tasting_score = TastingScore {
        appearance: jitter(rng, rating, -0.3_f32, 0.3_f32),
        aroma: jitter(rng, rating, -0.2_f32, 0.4_f32),
        taste: jitter(rng, rating, -0.1_f32, 0.2_f32),
        texture: jitter(rng, rating, -0.2_f32, 0.3_f32),
        overall: rating,
    };

    ChocolateItem {
        url: Some(format!(
            "https://www.c-spot.com/chocolate/{}-{}",
            slug(brand),
            slug(origin)
        )),
        detailed_review: Some(detailed_review),
        awards,
        tasting_score: Some(tasting_score),
        ..ChocolateItem::new(format!("choc_{number:03}"), name, brand, kind)
            .with_origin(origin)
            .with_cocoa_percentage(cocoa)
            .with_flavor_notes(notes)
            .with_rating(rating)
            .with_price_range(price)
            .with_description(description)
    }
}

fn product_name(rng: &mut impl Rng, kind: ChocolateType, origin: &str, cocoa: u8) -> String {
    let style = match kind {
        ChocolateType::Dark => pick(
            rng,
            &[
                "{origin} {cocoa}%",
                "Single Origin {origin} {cocoa}%",
                "{origin} Reserve {cocoa}%",
                "Estate {origin} {cocoa}%",
                "Grand Cru {origin} {cocoa}%",
                "{origin} Selection {cocoa}%",
                "Pure {origin} {cocoa}%",
            ],
        ),
        ChocolateType::Milk => pick(
            rng,
            &[
                "Milk Chocolate {cocoa}%",
                "{origin} Milk {cocoa}%",
                "Creamy Milk {cocoa}%",
                "Premium Milk {cocoa}%",
            ],
        ),
        ChocolateType::White => pick(
            rng,
            &[
                "White Chocolate {cocoa}%",
                "Pure White {cocoa}%",
                "Ivory {cocoa}%",
                "Blanc {cocoa}%",
            ],
        ),
        ChocolateType::Ruby => pick(
            rng,
            &["Ruby {cocoa}%", "Pink Ruby {cocoa}%", "Ruby Couverture {cocoa}%"],
        ),
    };
    style
        .replace("{origin}", origin)
        .replace("{cocoa}", &cocoa.to_string())
}

fn describe(rng: &mut impl Rng, kind: ChocolateType, origin: &str, notes: &[String]) -> String {
    let flavors = notes.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ");
    let template = pick(
        rng,
        &[
            "A {kind} chocolate from {origin} featuring notes of {flavors}.",
            "Exceptional {kind} chocolate showcasing {origin}'s unique terroir with {flavors} characteristics.",
            "Premium {kind} chocolate from {origin} with distinctive {flavors} profile.",
            "Single-origin {kind} chocolate highlighting {origin}'s {flavors} character.",
            "Artisanal {kind} chocolate from {origin} expressing {flavors} complexity.",
        ],
    );
    template
        .replace("{kind}", kind.as_str())
        .replace("{origin}", origin)
        .replace("{flavors}", &flavors)
}

fn review(
    rng: &mut impl Rng,
    (brand, origin): (&str, &str),
    kind: ChocolateType,
    cocoa: u8,
    notes: &[String],
) -> String {
    let lead = notes.first().map_or("cocoa", String::as_str);
    let follow = notes.get(1).map_or("caramel", String::as_str);
    let template = pick(
        rng,
        &[
            "This {origin} chocolate opens with {lead} aromas leading to {follow} flavors on the palate. The {cocoa}% cocoa content provides excellent balance with a smooth, lingering finish.",
            "Exceptional chocolate expressing {origin}'s terroir beautifully. Notes of {lead} and {follow} develop complexity as it melts. Well-crafted with excellent texture and clean finish.",
            "A standout example of {origin} cacao. The {lead} character is immediately apparent, followed by {follow} undertones. Perfect cocoa percentage at {cocoa}% for optimal flavor expression.",
            "This bar showcases why {origin} is prized by chocolate connoisseurs. Beautiful {lead} aromatics with {follow} flavors. Excellent craftsmanship from {brand}.",
            "Premium {kind} chocolate with distinctive {origin} character. Rich {lead} notes complemented by {follow} complexity. Outstanding quality and remarkable finish.",
        ],
    );
    template
        .replace("{origin}", origin)
        .replace("{brand}", brand)
        .replace("{kind}", kind.as_str())
        .replace("{cocoa}", &cocoa.to_string())
        .replace("{lead}", lead)
        .replace("{follow}", follow)
}
