//! Glass Skin storefront library.
//!
//! Serves product cards, option changes and landing sections as JSON for
//! the rendering layer, backed by a cached catalog export. Exposed as a
//! library so the router can be exercised in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    routing::get,
};
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the storefront router with health checks, API routes and the
/// tracing middleware applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Wrap the router so trailing slashes are ignored.
///
/// Path normalization has to run before routing, so it wraps the finished
/// router rather than being added as a router layer.
pub fn service(router: Router) -> tower_http::normalize_path::NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog cannot be loaded.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().catalog().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
