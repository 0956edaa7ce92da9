//! The static chocolate catalog and its descriptive metadata.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ChocolateItem;

/// Legend for the rating scale written into generated catalogs.
pub const RATING_SCALE: &str = "5.0 (excellent) to 1.0 (poor)";
/// Legend for the price tiers written into generated catalogs.
pub const PRICE_SCALE: &str = "$ (under $5) to $$$$ (over $20)";

/// Descriptive header of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogMetadata {
    /// Where the records came from.
    #[serde(default)]
    pub source: String,
    /// Creation timestamp as written by the producer.
    #[serde(default)]
    pub created_date: String,
    /// Number of records the producer wrote.
    #[serde(default)]
    pub total_chocolates: usize,
    /// Legend for the rating scale.
    #[serde(default)]
    pub rating_scale: String,
    /// Legend for the price tiers.
    #[serde(default)]
    pub price_scale: String,
    /// Free-text summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Distinct origins present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origins_covered: Option<usize>,
    /// Distinct brands present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands_covered: Option<usize>,
}

impl CatalogMetadata {
    /// Describe `items`, filling the counts and the standard scale legends.
    #[must_use]
    pub fn describe(
        source: impl Into<String>,
        created_date: impl Into<String>,
        items: &[ChocolateItem],
    ) -> Self {
        let origins: BTreeSet<&str> = items.iter().filter_map(|i| i.origin.as_deref()).collect();
        let brands: BTreeSet<&str> = items.iter().map(|i| i.brand.as_str()).collect();
        Self {
            source: source.into(),
            created_date: created_date.into(),
            total_chocolates: items.len(),
            rating_scale: RATING_SCALE.to_owned(),
            price_scale: PRICE_SCALE.to_owned(),
            description: None,
            origins_covered: Some(origins.len()),
            brands_covered: Some(brands.len()),
        }
    }
}

/// A loaded collection of chocolates.
///
/// The catalog is read-only once built; recommendation requests borrow its
/// items.
///
/// # Examples
/// ```
/// use sommelier_core::{Catalog, CatalogMetadata, ChocolateItem, ChocolateType};
///
/// let items = vec![ChocolateItem::new("a", "Ghana 68%", "Divine", ChocolateType::Dark)];
/// let metadata = CatalogMetadata::describe("hand-curated", "2025-01-02", &items);
/// let catalog = Catalog::new(metadata, items);
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.metadata().total_chocolates, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    metadata: CatalogMetadata,
    chocolates: Vec<ChocolateItem>,
}

impl Catalog {
    /// Build a catalog from metadata and items.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "catalogs are assembled at runtime from file reads"
    )]
    #[must_use]
    pub fn new(metadata: CatalogMetadata, chocolates: Vec<ChocolateItem>) -> Self {
        Self {
            metadata,
            chocolates,
        }
    }

    /// Catalog header.
    #[must_use]
    pub const fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// All items in file order.
    #[must_use]
    pub fn items(&self) -> &[ChocolateItem] {
        &self.chocolates
    }

    /// Look up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChocolateItem> {
        self.chocolates.iter().find(|item| item.id == id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chocolates.len()
    }

    /// Report whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chocolates.is_empty()
    }

    /// Consume the catalog and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<ChocolateItem> {
        self.chocolates
    }
}
