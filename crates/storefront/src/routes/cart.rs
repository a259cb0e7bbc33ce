//! Cart route handlers.
//!
//! The cart itself lives with the commerce backend. This handler only gates
//! the add: it resolves the card and hands back the line to submit.

use axum::{Json, extract::State};
use glasskin_core::{ProductCardLogic, Selection};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::find_product;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Add-to-cart request.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub slug: String,
    #[serde(default)]
    pub selection: Selection,
    /// Must be at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

const fn default_quantity() -> i64 {
    1
}

/// Line to submit to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineView {
    /// Variant ID, or the product ID for products without options.
    pub merchandise_id: String,
    pub product_id: String,
    pub quantity: u32,
    /// Formatted unit price.
    pub unit_price: String,
}

/// Validate an add-to-cart request against the card state.
#[instrument(skip(state, request), fields(slug = %request.slug, quantity = request.quantity))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartLineView>> {
    if request.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    let quantity = u32::try_from(request.quantity)
        .map_err(|_| AppError::BadRequest("quantity is too large".to_string()))?;

    let catalog = state.catalog().catalog().await?;
    let product = find_product(&catalog, &request.slug)?;
    let logic = ProductCardLogic::resolve(product, &request.selection);

    if !logic.can_add_to_cart {
        return Err(AppError::Conflict(format!(
            "{} cannot be added with the current selection",
            product.slug
        )));
    }

    let merchandise_id = logic
        .matching_variant
        .map_or_else(|| product.id.to_string(), |v| v.id.to_string());
    info!(merchandise_id = %merchandise_id, "Add to cart accepted");

    Ok(Json(CartLineView {
        merchandise_id,
        product_id: product.id.to_string(),
        quantity,
        unit_price: catalog.money(logic.current_price).display(),
    }))
}
