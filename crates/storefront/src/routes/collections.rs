//! Collection route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::views::CollectionView;

/// List every collection.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<CollectionView>>> {
    let catalog = state.catalog().catalog().await?;
    Ok(Json(
        catalog
            .collections
            .iter()
            .map(CollectionView::from)
            .collect(),
    ))
}
