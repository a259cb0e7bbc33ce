//! Integration tests for Glasskin.
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p glasskin-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use glasskin_storefront::{
    AppState, app,
    config::{CatalogConfig, StorefrontConfig},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Catalog used by the API tests.
///
/// `glow-cushion` has every Color x Size combination with Pink/30ml sold out.
/// `sun-stick` is a simple product with its stock flag off.
#[must_use]
pub fn fixture_catalog() -> Value {
    json!({
        "currency_code": "USD",
        "collections": [
            { "id": "col-sun", "slug": "sun-care", "title": "Sun Care" },
            { "id": "col-treat", "slug": "treatments", "title": "Treatments",
              "description": "Serums and essences" }
        ],
        "products": [
            {
                "id": "p-cushion", "slug": "glow-cushion", "title": "Glow Cushion",
                "description": "<p>Dewy <b>glass skin</b> finish.</p>",
                "images": ["https://cdn.example/cushion.jpg"],
                "price": "38.00", "featured": true,
                "options": [
                    { "name": "Color", "values": ["Pink", "Green"],
                      "swatches": { "Pink": "#f4b6c2", "Green": "#b5d3b0" } },
                    { "name": "Size", "values": ["30ml", "50ml"] }
                ],
                "variants": [
                    { "id": "pink-30", "options": { "Color": "Pink", "Size": "30ml" }, "price": "38.00", "stock": 0 },
                    { "id": "pink-50", "options": { "Color": "Pink", "Size": "50ml" }, "price": "40.00", "compare_at_price": "50.00", "stock": 3 },
                    { "id": "green-30", "options": { "Color": "Green", "Size": "30ml" }, "price": "38.00", "stock": true },
                    { "id": "green-50", "options": { "Color": "Green", "Size": "50ml" }, "price": "44.00", "stock": 8 }
                ]
            },
            {
                "id": "p-toner", "slug": "rice-toner", "title": "Rice Toner",
                "price": "18.00", "compare_at_price": "24.00", "stock": true,
                "tags": ["toner"]
            },
            {
                "id": "p-stick", "slug": "sun-stick", "title": "Airy Sun Stick",
                "price": "22.00", "stock": false,
                "tags": ["SPF"], "collection_ids": ["col-sun"],
                "sun_protection": { "spf": "spf50_plus", "finish": "invisible", "texture": "gel" }
            },
            {
                "id": "p-serum", "slug": "snail-serum", "title": "Snail Serum",
                "price": "25.00", "tags": ["serum"], "collection_ids": ["col-treat"]
            }
        ]
    })
}

/// A storefront router backed by a catalog file on disk.
pub struct TestContext {
    pub router: Router,
    pub catalog_path: PathBuf,
}

impl TestContext {
    /// Write `catalog` to a temporary file and build the router around it.
    #[must_use]
    pub fn with_catalog(catalog: &Value) -> Self {
        let catalog_path =
            std::env::temp_dir().join(format!("glasskin-it-{}.json", Uuid::new_v4()));
        std::fs::write(&catalog_path, catalog.to_string()).expect("Failed to write catalog");
        Self::at_path(catalog_path)
    }

    /// Build the router for a catalog path that may not exist.
    #[must_use]
    pub fn at_path(catalog_path: PathBuf) -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid address"),
            port: 0,
            catalog: CatalogConfig::new(catalog_path.clone()),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        Self {
            router: app(AppState::new(&config)),
            catalog_path,
        }
    }

    /// Send a GET request and return the status and JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, json)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.catalog_path);
    }
}
