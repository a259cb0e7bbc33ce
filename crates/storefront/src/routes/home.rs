//! Landing page handler.

use axum::{
    Json,
    extract::{Query, State},
};
use glasskin_core::LandingSections;
use tracing::instrument;

use super::find_collection;
use super::products::CollectionQuery;
use crate::error::Result;
use crate::state::AppState;
use crate::views::LandingView;

/// Landing sections, optionally narrowed to one collection.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<CollectionQuery>,
) -> Result<Json<LandingView>> {
    let catalog = state.catalog().catalog().await?;
    let collection = find_collection(&catalog, query.collection.as_deref())?;

    let sections = LandingSections::build(&catalog, collection.map(|c| &c.id));
    Ok(Json(LandingView::new(&catalog, &sections, collection)))
}
