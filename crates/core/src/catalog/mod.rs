//! The product catalog.
//!
//! A [`Catalog`] is the data set the storefront renders: every product with
//! its options and variants, plus the collections used to filter the
//! landing page. It is parsed from a JSON export and validated once, so the
//! resolver can trust its structural invariants.
//!
//! # Format
//!
//! ```json
//! {
//!   "currency_code": "USD",
//!   "collections": [{ "id": "c1", "slug": "dry-skin", "title": "Dry Skin" }],
//!   "products": [{
//!     "id": "p1", "slug": "cushion", "title": "Glow Cushion", "price": "40.00",
//!     "options": [{ "name": "Color", "values": ["Pink"], "swatches": { "Pink": "#f4b6c2" } }],
//!     "variants": [{ "id": "v1", "options": { "Color": "Pink" }, "price": "40.00", "stock": 3 }]
//!   }]
//! }
//! ```

mod product;

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use product::{
    COLOR_OPTION, Collection, Finish, Product, ProductOption, ProductVariant, SpfLevel,
    SunProtection, Texture,
};

use crate::types::{CollectionId, CurrencyCode, Money};

/// Errors raised while parsing or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share a slug.
    #[error("duplicate product slug: {0}")]
    DuplicateProductSlug(String),

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two collections share a slug or ID.
    #[error("duplicate collection: {0}")]
    DuplicateCollection(String),

    /// A product declares the same option name twice.
    #[error("product {product}: duplicate option {option}")]
    DuplicateOption { product: String, option: String },

    /// A price is below zero.
    #[error("product {product}: negative price")]
    NegativePrice { product: String },

    /// A variant's option values do not line up with the product's options.
    #[error("product {product}, variant {variant}: {reason}")]
    InvalidVariant {
        product: String,
        variant: String,
        reason: String,
    },

    /// A product references a collection that does not exist.
    #[error("product {product}: unknown collection {collection}")]
    UnknownCollection { product: String, collection: String },
}

/// Validated catalog of products and collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Currency every price is expressed in.
    #[serde(default)]
    pub currency_code: CurrencyCode,
    /// Collections, in display order.
    #[serde(default)]
    pub collections: Vec<Collection>,
    /// Products, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and a validation
    /// variant for the first structural problem found.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural invariants the resolver relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut collection_keys = HashSet::new();
        for collection in &self.collections {
            if !collection_keys.insert(("id", collection.id.as_str()))
                || !collection_keys.insert(("slug", collection.slug.as_str()))
            {
                return Err(CatalogError::DuplicateCollection(collection.slug.clone()));
            }
        }

        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for product in &self.products {
            if !slugs.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateProductSlug(product.slug.clone()));
            }
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
            for collection in &product.collection_ids {
                if self.collection(collection).is_none() {
                    return Err(CatalogError::UnknownCollection {
                        product: product.slug.clone(),
                        collection: collection.to_string(),
                    });
                }
            }
            validate_product(product)?;
        }

        Ok(())
    }

    /// Look up a product by slug.
    #[must_use]
    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Look up a collection by ID.
    #[must_use]
    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Look up a collection by slug.
    #[must_use]
    pub fn collection_by_slug(&self, slug: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    /// Products shown for an optional collection filter.
    ///
    /// With no filter every product is returned.
    pub fn filtered_products<'a>(
        &'a self,
        collection: Option<&'a CollectionId>,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| collection.is_none_or(|id| p.in_collection(id)))
    }

    /// Pair an amount with the catalog currency.
    #[must_use]
    pub const fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency_code)
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    let negative = |amount: Decimal| amount < Decimal::ZERO;
    if negative(product.price) || product.compare_at_price.is_some_and(negative) {
        return Err(CatalogError::NegativePrice {
            product: product.slug.clone(),
        });
    }

    let mut names = HashSet::new();
    let mut variant_ids = HashSet::new();
    let mut combinations = HashSet::new();
    for option in &product.options {
        if !names.insert(option.name.as_str()) {
            return Err(CatalogError::DuplicateOption {
                product: product.slug.clone(),
                option: option.name.clone(),
            });
        }
    }

    for variant in &product.variants {
        let invalid = |reason: String| CatalogError::InvalidVariant {
            product: product.slug.clone(),
            variant: variant.id.to_string(),
            reason,
        };

        if negative(variant.price) || variant.compare_at_price.is_some_and(negative) {
            return Err(CatalogError::NegativePrice {
                product: product.slug.clone(),
            });
        }

        if variant.options.len() != product.options.len() {
            return Err(invalid(format!(
                "expected {} option values, got {}",
                product.options.len(),
                variant.options.len()
            )));
        }

        for (name, value) in &variant.options {
            let option = product
                .option(name)
                .ok_or_else(|| invalid(format!("unknown option {name}")))?;
            if !option.has_value(value) {
                return Err(invalid(format!("{name} has no value {value}")));
            }
        }

        if !variant_ids.insert(variant.id.as_str()) {
            return Err(invalid("duplicate variant id".to_string()));
        }
        // One variant per combination, so a selection resolves to at most one.
        if !combinations.insert(&variant.options) {
            return Err(invalid("duplicate option combination".to_string()));
        }
    }

    Ok(())
}
