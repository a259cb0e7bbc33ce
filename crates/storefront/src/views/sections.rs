//! Landing page view.

use glasskin_core::{Catalog, Collection, LandingSections, Product, ProductCardLogic, Selection};
use serde::Serialize;

use super::card::{ProductCardView, strip_markup};

/// Landing page display data.
#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    /// Slug of the collection the page is filtered by.
    pub collection: Option<String>,
    pub collections: Vec<CollectionView>,
    pub sun_protection: Vec<SunComparisonView>,
    pub treatments: Vec<ProductCardView>,
    pub featured: Vec<ProductCardView>,
}

/// Collection display data.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// One row of the sun protection comparer.
#[derive(Debug, Clone, Serialize)]
pub struct SunComparisonView {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub spf: &'static str,
    pub finish: &'static str,
    pub texture: &'static str,
    pub price: String,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        Self {
            slug: collection.slug.clone(),
            title: collection.title.clone(),
            description: collection.description.clone(),
            image: collection.image.clone(),
        }
    }
}

impl LandingView {
    /// Build the landing page for grouped sections.
    ///
    /// Cards start with an empty selection, like a freshly rendered page.
    #[must_use]
    pub fn new(
        catalog: &Catalog,
        sections: &LandingSections<'_>,
        collection: Option<&Collection>,
    ) -> Self {
        let selection = Selection::new();
        let card = |product: &Product| {
            ProductCardView::new(catalog, &ProductCardLogic::resolve(product, &selection))
        };

        Self {
            collection: collection.map(|c| c.slug.clone()),
            collections: catalog
                .collections
                .iter()
                .map(CollectionView::from)
                .collect(),
            sun_protection: sections
                .sun_protection
                .iter()
                .map(|row| SunComparisonView {
                    slug: row.product.slug.clone(),
                    title: row.product.title.clone(),
                    description: row.product.description.as_deref().and_then(strip_markup),
                    image: row.product.primary_image().map(ToString::to_string),
                    spf: row.attributes.spf.label(),
                    finish: row.attributes.finish.label(),
                    texture: row.attributes.texture.label(),
                    price: catalog.money(row.product.price).display(),
                })
                .collect(),
            treatments: sections.treatments.iter().copied().map(card).collect(),
            featured: sections.featured.iter().copied().map(card).collect(),
        }
    }
}
