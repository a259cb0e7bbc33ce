//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use glasskin_core::{ProductCardLogic, Selection};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{find_collection, find_product};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::ProductCardView;

/// Collection filter for listings.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    /// Collection slug; absent means every product.
    pub collection: Option<String>,
}

/// An option change on a card.
#[derive(Debug, Deserialize)]
pub struct OptionChangeRequest {
    /// Selection the card currently holds.
    #[serde(default)]
    pub selection: Selection,
    pub option: String,
    pub value: String,
}

/// List product cards, each in its initial state.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<Vec<ProductCardView>>> {
    let catalog = state.catalog().catalog().await?;
    let collection = find_collection(&catalog, query.collection.as_deref())?;

    let selection = Selection::new();
    let cards = catalog
        .filtered_products(collection.map(|c| &c.id))
        .map(|product| {
            ProductCardView::new(&catalog, &ProductCardLogic::resolve(product, &selection))
        })
        .collect();

    Ok(Json(cards))
}

/// Product card for the selection given as query parameters.
///
/// `GET /api/products/glow-cushion?Color=Pink&Size=50ml`
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(selection): Query<Selection>,
) -> Result<Json<ProductCardView>> {
    let catalog = state.catalog().catalog().await?;
    let product = find_product(&catalog, &slug)?;

    let logic = ProductCardLogic::resolve(product, &selection);
    Ok(Json(ProductCardView::new(&catalog, &logic)))
}

/// Apply an option change and return the re-resolved card.
///
/// Values that are currently unavailable may still be chosen; the card then
/// reports no matching variant.
#[instrument(skip(state, request), fields(option = %request.option, value = %request.value))]
pub async fn change_option(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<OptionChangeRequest>,
) -> Result<Json<ProductCardView>> {
    let catalog = state.catalog().catalog().await?;
    let product = find_product(&catalog, &slug)?;

    let option = product.option(&request.option).ok_or_else(|| {
        AppError::BadRequest(format!("{slug} has no option {}", request.option))
    })?;
    if !option.has_value(&request.value) {
        return Err(AppError::BadRequest(format!(
            "{} is not a value of {}",
            request.value, option.name
        )));
    }

    let selection = ProductCardLogic::resolve(product, &request.selection)
        .handle_option_change(&request.option, &request.value);
    let logic = ProductCardLogic::resolve(product, &selection);
    debug!(
        variant = ?logic.matching_variant.map(|v| v.id.as_str()),
        can_add_to_cart = logic.can_add_to_cart,
        "Option changed"
    );

    Ok(Json(ProductCardView::new(&catalog, &logic)))
}
