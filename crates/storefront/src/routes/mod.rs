//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Catalog readiness check
//!
//! # Products
//! GET  /api/products                    - Product cards (?collection=slug)
//! GET  /api/products/{slug}             - Product card (?Option=Value...)
//! POST /api/products/{slug}/options     - Apply an option change
//! GET  /api/collections                 - Collection listing
//! GET  /api/home                        - Landing sections (?collection=slug)
//!
//! # Cart
//! POST /api/cart/add                    - Gate an add-to-cart request
//! ```

pub mod cart;
pub mod collections;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use glasskin_core::{Catalog, Collection, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
        .route("/{slug}/options", post(products::change_option))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/add", post(cart::add))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .route("/api/collections", get(collections::index))
        .route("/api/home", get(home::home))
        .nest("/api/cart", cart_routes())
}

/// Look up a product by slug.
fn find_product<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a Product> {
    catalog
        .product(slug)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))
}

/// Look up an optional collection filter by slug.
fn find_collection<'a>(catalog: &'a Catalog, slug: Option<&str>) -> Result<Option<&'a Collection>> {
    slug.map(|slug| {
        catalog
            .collection_by_slug(slug)
            .ok_or_else(|| AppError::NotFound(format!("collection {slug}")))
    })
    .transpose()
}
