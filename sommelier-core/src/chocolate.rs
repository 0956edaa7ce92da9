//! Chocolate records held in the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::PriceTier;

/// Highest rating on the catalog's five-point scale.
pub const MAX_RATING: f32 = 5.0;

/// Broad chocolate categories.
///
/// # Examples
/// ```
/// use sommelier_core::ChocolateType;
///
/// assert_eq!(ChocolateType::Ruby.as_str(), "ruby");
/// assert_eq!("Dark".parse::<ChocolateType>(), Ok(ChocolateType::Dark));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChocolateType {
    /// Dark chocolate.
    Dark,
    /// Milk chocolate.
    Milk,
    /// White chocolate.
    White,
    /// Ruby chocolate.
    Ruby,
}

impl ChocolateType {
    /// Every chocolate type.
    pub const ALL: [Self; 4] = [Self::Dark, Self::Milk, Self::White, Self::Ruby];

    /// Return the type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Milk => "milk",
            Self::White => "white",
            Self::Ruby => "ruby",
        }
    }

    /// Find the first type named anywhere in free text.
    ///
    /// Questionnaire answers such as `"Dark intense (>70%)"` name the type
    /// alongside extra detail.
    ///
    /// ```
    /// use sommelier_core::ChocolateType;
    ///
    /// assert_eq!(
    ///     ChocolateType::mentioned_in("Dark balanced (50-70%)"),
    ///     Some(ChocolateType::Dark)
    /// );
    /// assert_eq!(ChocolateType::mentioned_in("No preference"), None);
    /// ```
    #[must_use]
    pub fn mentioned_in(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphabetic())
            .find_map(|word| word.parse().ok())
    }
}

impl fmt::Display for ChocolateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a chocolate type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chocolate type '{0}'")]
pub struct UnknownChocolateType(pub String);

impl FromStr for ChocolateType {
    type Err = UnknownChocolateType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "milk" => Ok(Self::Milk),
            "white" => Ok(Self::White),
            "ruby" => Ok(Self::Ruby),
            _ => Err(UnknownChocolateType(s.to_owned())),
        }
    }
}

/// Per-criterion tasting marks on the five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TastingScore {
    /// Visual finish of the bar.
    pub appearance: f32,
    /// Aroma before tasting.
    pub aroma: f32,
    /// Flavor on the palate.
    pub taste: f32,
    /// Melt and mouthfeel.
    pub texture: f32,
    /// Overall mark, matching the headline rating.
    pub overall: f32,
}

/// A single chocolate available for recommendation.
///
/// Records are created once when a catalog loads and never mutated. Optional
/// fields stay `None` when the source omits them; scoring treats a missing
/// field as a non-match rather than an error.
///
/// # Examples
/// ```
/// use sommelier_core::{ChocolateItem, ChocolateType, PriceTier};
///
/// let item = ChocolateItem::new("choc_001", "Piura Select 70%", "Cacaosuyo", ChocolateType::Dark)
///     .with_origin("Peru")
///     .with_cocoa_percentage(70)
///     .with_flavor_notes(["fruity", "floral", "caramel"])
///     .with_rating(4.5)
///     .with_price_range(PriceTier::PREMIUM);
/// assert!(item.validate().is_ok());
/// assert_eq!(item.origin.as_deref(), Some("Peru"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChocolateItem {
    /// Catalog identifier. Numeric identifiers are read as their decimal text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Product name.
    pub name: String,
    /// Maker or brand.
    pub brand: String,
    /// Country the beans come from.
    #[serde(default)]
    pub origin: Option<String>,
    /// Cocoa content in percent.
    #[serde(default)]
    pub cocoa_percentage: Option<u8>,
    /// Chocolate category.
    #[serde(rename = "type")]
    pub kind: ChocolateType,
    /// Ordered tasting notes.
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    /// Rating on the `0.0..=5.0` scale.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Relative cost bracket.
    #[serde(default)]
    pub price_range: Option<PriceTier>,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Link to a fuller review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Long-form tasting review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_review: Option<String>,
    /// Awards and certifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<String>,
    /// Per-criterion tasting marks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_score: Option<TastingScore>,
}

/// Reasons a [`ChocolateItem`] is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChocolateItemError {
    /// The identifier was empty.
    #[error("chocolate identifier must not be empty")]
    MissingId,
    /// The name was empty.
    #[error("chocolate {id} has an empty name")]
    MissingName {
        /// Identifier of the affected item.
        id: String,
    },
    /// Cocoa content above 100%.
    #[error("chocolate {id} has cocoa percentage {percentage} above 100")]
    CocoaOutOfRange {
        /// Identifier of the affected item.
        id: String,
        /// Value found in the record.
        percentage: u8,
    },
    /// Rating outside `0.0..=5.0` or not finite.
    #[error("chocolate {id} has rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange {
        /// Identifier of the affected item.
        id: String,
        /// Value found in the record.
        rating: f32,
    },
}

impl ChocolateItem {
    /// Construct an item with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        kind: ChocolateType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            origin: None,
            cocoa_percentage: None,
            kind,
            flavor_notes: Vec::new(),
            rating: None,
            price_range: None,
            description: String::new(),
            url: None,
            detailed_review: None,
            awards: Vec::new(),
            tasting_score: None,
        }
    }

    /// Set the origin country.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the cocoa percentage.
    #[must_use]
    pub const fn with_cocoa_percentage(mut self, percentage: u8) -> Self {
        self.cocoa_percentage = Some(percentage);
        self
    }

    /// Replace the flavor notes.
    #[must_use]
    pub fn with_flavor_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavor_notes = notes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the price tier.
    #[must_use]
    pub const fn with_price_range(mut self, tier: PriceTier) -> Self {
        self.price_range = Some(tier);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the record's field ranges.
    ///
    /// # Errors
    /// Returns [`ChocolateItemError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ChocolateItemError> {
        if self.id.trim().is_empty() {
            return Err(ChocolateItemError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(ChocolateItemError::MissingName {
                id: self.id.clone(),
            });
        }
        if let Some(percentage) = self.cocoa_percentage
            && percentage > 100
        {
            return Err(ChocolateItemError::CocoaOutOfRange {
                id: self.id.clone(),
                percentage,
            });
        }
        if let Some(rating) = self.rating
            && !(rating.is_finite() && (0.0..=MAX_RATING).contains(&rating))
        {
            return Err(ChocolateItemError::RatingOutOfRange {
                id: self.id.clone(),
                rating,
            });
        }
        Ok(())
    }

    /// Rating used for ordering; a missing rating ranks as `0.0`.
    #[must_use]
    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
