//! Product, option, variant and collection types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CollectionId, ProductId, StockLevel, VariantId};

/// The option name whose values may carry swatch colors.
pub const COLOR_OPTION: &str = "color";

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// URL slug.
    pub slug: String,
    /// Product title.
    pub title: String,
    /// Description, possibly containing HTML markup.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Product tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Base price, used when no variant is resolved.
    pub price: Decimal,
    /// Base compare-at price (original price if on sale).
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// General stock state for products without options.
    #[serde(default)]
    pub stock: StockLevel,
    /// Collections this product belongs to.
    #[serde(default)]
    pub collection_ids: Vec<CollectionId>,
    /// Product options, in display order.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Product variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Structured sun protection attributes for SPF products.
    #[serde(default)]
    pub sun_protection: Option<SunProtection>,
}

impl Product {
    /// Whether the product is configured through options.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.options.is_empty()
    }

    /// Look up an option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// The primary product image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether any tag satisfies `predicate` after lowercasing.
    pub fn has_tag_matching(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.tags.iter().any(|tag| predicate(&tag.to_lowercase()))
    }

    /// Whether the product belongs to the given collection.
    #[must_use]
    pub fn in_collection(&self, id: &CollectionId) -> bool {
        self.collection_ids.contains(id)
    }
}

/// Product option definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Size").
    pub name: String,
    /// Available values in display order (e.g., `["30ml", "50ml"]`).
    pub values: Vec<String>,
    /// Swatch colors keyed by value, used for the Color option.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub swatches: BTreeMap<String, String>,
}

impl ProductOption {
    /// Whether this is the color option.
    #[must_use]
    pub fn is_color(&self) -> bool {
        self.name.eq_ignore_ascii_case(COLOR_OPTION)
    }

    /// Whether `value` is one of this option's values.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Swatch color for `value`. Only the Color option has swatches.
    #[must_use]
    pub fn swatch(&self, value: &str) -> Option<&str> {
        if !self.is_color() {
            return None;
        }
        self.swatches.get(value).map(String::as_str)
    }
}

/// A product variant (specific combination of option values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Option values keyed by option name.
    pub options: BTreeMap<String, String>,
    /// Image override for this variant.
    #[serde(default)]
    pub image: Option<String>,
    /// Current price.
    pub price: Decimal,
    /// Compare-at price (original price if on sale).
    #[serde(default)]
    pub compare_at_price: Option<Decimal>,
    /// Stock state.
    #[serde(default)]
    pub stock: StockLevel,
}

impl ProductVariant {
    /// This variant's value for `option`.
    #[must_use]
    pub fn value(&self, option: &str) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }

    /// Whether the variant can be sold.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock.is_in_stock()
    }
}

/// A collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: CollectionId,
    /// URL slug.
    pub slug: String,
    /// Collection title.
    pub title: String,
    /// Plain text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Collection image URL.
    #[serde(default)]
    pub image: Option<String>,
}

// =============================================================================
// Sun Protection Attributes
// =============================================================================

/// Structured attributes for sunscreen products.
///
/// Missing fields fall back to the most common formulation: SPF 30, a
/// natural finish and a cream texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SunProtection {
    #[serde(default)]
    pub spf: SpfLevel,
    #[serde(default)]
    pub finish: Finish,
    #[serde(default)]
    pub texture: Texture,
}

/// Labelled SPF rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpfLevel {
    #[default]
    Spf30,
    Spf45,
    Spf50Plus,
}

impl SpfLevel {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Spf30 => "SPF 30",
            Self::Spf45 => "SPF 45",
            Self::Spf50Plus => "SPF 50+",
        }
    }
}

/// Finish left on the skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Invisible,
    ToneUp,
    #[default]
    Natural,
}

impl Finish {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Invisible => "Invisible",
            Self::ToneUp => "Tone-up",
            Self::Natural => "Natural",
        }
    }
}

/// Formula texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    Mineral,
    Gel,
    #[default]
    Cream,
}

impl Texture {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mineral => "Mineral",
            Self::Gel => "Gel",
            Self::Cream => "Cream",
        }
    }
}
