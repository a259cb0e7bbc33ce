//! Landing page product sections.
//!
//! The landing page groups the (optionally collection-filtered) catalog into
//! a sun protection comparer, a short row of targeted treatments and the
//! full featured grid. Grouping is driven by product tags; comparer
//! attributes come from each product's structured [`SunProtection`] data.

use crate::catalog::{Catalog, Product, SunProtection};
use crate::types::CollectionId;

/// Maximum products shown in the treatments row.
pub const TREATMENT_LIMIT: usize = 4;

/// Tag fragments that mark a sun protection product.
const SUN_TAG_FRAGMENTS: &[&str] = &["spf", "sunscreen"];

/// Tags that mark a targeted treatment.
const TREATMENT_TAGS: &[&str] = &["serum", "treatment", "essence"];

/// Products grouped for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingSections<'a> {
    /// Sunscreens with their comparer attributes.
    pub sun_protection: Vec<SunComparison<'a>>,
    /// Serums, treatments and essences.
    pub treatments: Vec<&'a Product>,
    /// Every product passing the collection filter.
    pub featured: Vec<&'a Product>,
}

/// One row of the sun protection comparer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunComparison<'a> {
    pub product: &'a Product,
    pub attributes: SunProtection,
}

impl<'a> LandingSections<'a> {
    /// Group the catalog, restricted to `collection` when given.
    #[must_use]
    pub fn build(catalog: &'a Catalog, collection: Option<&'a CollectionId>) -> Self {
        let featured: Vec<&Product> = catalog.filtered_products(collection).collect();

        let sun_protection = featured
            .iter()
            .copied()
            .filter(|p| is_sun_protection(p))
            .map(|product| SunComparison {
                product,
                attributes: product.sun_protection.unwrap_or_default(),
            })
            .collect();

        let treatments = featured
            .iter()
            .copied()
            .filter(|p| is_treatment(p))
            .take(TREATMENT_LIMIT)
            .collect();

        Self {
            sun_protection,
            treatments,
            featured,
        }
    }
}

/// Whether a product belongs in the sun protection comparer.
#[must_use]
pub fn is_sun_protection(product: &Product) -> bool {
    product.has_tag_matching(|tag| SUN_TAG_FRAGMENTS.iter().any(|f| tag.contains(f)))
}

/// Whether a product belongs in the treatments row.
#[must_use]
pub fn is_treatment(product: &Product) -> bool {
    product.has_tag_matching(|tag| TREATMENT_TAGS.contains(&tag))
}
