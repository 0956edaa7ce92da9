//! Ordinal price tiers written as runs of `$` markers.
//!
//! # Examples
//! ```
//! use sommelier_core::PriceTier;
//!
//! let tier: PriceTier = "$$$".parse().expect("valid tier");
//! assert_eq!(tier.level(), 3);
//! assert_eq!(tier.to_string(), "$$$");
//!
//! // Questionnaire answers carry a legend after the markers.
//! let budget: PriceTier = "$$ ($5-10)".parse().expect("valid budget");
//! assert_eq!(budget, PriceTier::MODERATE);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MARKER: char = '$';

/// Relative cost bracket from `$` (cheapest) to `$$$$` (most expensive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PriceTier(u8);

/// Errors returned when parsing a [`PriceTier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceTierError {
    /// The text did not start with a `$` marker.
    #[error("price tier {raw:?} must start with `$` markers")]
    MissingMarkers {
        /// Text that failed to parse.
        raw: String,
    },
    /// More markers than the highest tier.
    #[error("price tier {raw:?} exceeds {max} markers")]
    TooManyMarkers {
        /// Text that failed to parse.
        raw: String,
        /// Highest supported tier.
        max: u8,
    },
}

impl PriceTier {
    /// Under $5.
    pub const BUDGET: Self = Self(1);
    /// $5 to $10.
    pub const MODERATE: Self = Self(2);
    /// $10 to $20.
    pub const PREMIUM: Self = Self(3);
    /// Over $20.
    pub const LUXURY: Self = Self(4);

    /// Every tier from cheapest to most expensive.
    pub const ALL: [Self; 4] = [Self::BUDGET, Self::MODERATE, Self::PREMIUM, Self::LUXURY];

    /// Build a tier from its level, returning `None` outside `1..=4`.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1..=4 => Some(Self(level)),
            _ => None,
        }
    }

    /// Number of `$` markers.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// How many tiers `self` sits above `other`, or zero when it does not.
    #[must_use]
    pub const fn tiers_above(self, other: Self) -> u8 {
        self.0.saturating_sub(other.0)
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("$")?;
        }
        Ok(())
    }
}

impl FromStr for PriceTier {
    type Err = PriceTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let markers = s.trim_start().chars().take_while(|c| *c == MARKER).count();
        if markers == 0 {
            return Err(PriceTierError::MissingMarkers { raw: s.to_owned() });
        }
        u8::try_from(markers)
            .ok()
            .and_then(Self::from_level)
            .ok_or_else(|| PriceTierError::TooManyMarkers {
                raw: s.to_owned(),
                max: Self::LUXURY.0,
            })
    }
}

impl TryFrom<String> for PriceTier {
    type Error = PriceTierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceTier> for String {
    fn from(tier: PriceTier) -> Self {
        tier.to_string()
    }
}
