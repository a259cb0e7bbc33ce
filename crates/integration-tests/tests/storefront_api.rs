//! In-process tests for the storefront JSON API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use glasskin_integration_tests::{TestContext, fixture_catalog};
use glasskin_storefront::middleware::REQUEST_ID_HEADER;
use serde_json::{Value, json};
use tower::ServiceExt;

fn context() -> TestContext {
    TestContext::with_catalog(&fixture_catalog())
}

fn option_values(card: &Value, option: &str) -> Vec<String> {
    card["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|group| group["name"] == option)
        .unwrap()["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["value"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = context();
    let (status, body) = ctx.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_readiness_with_catalog() {
    let ctx = context();
    let (status, _) = ctx.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_without_catalog() {
    let ctx = TestContext::at_path("/nonexistent/glasskin-catalog.json".into());
    let (status, _) = ctx.get("/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = ctx.get("/api/products").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Catalog unavailable");
}

#[tokio::test]
async fn test_request_id_header() {
    let ctx = context();
    let response = ctx
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "it-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "it-42");
}

// ============================================================================
// Product cards
// ============================================================================

#[tokio::test]
async fn test_product_listing_initial_state() {
    let ctx = context();
    let (status, body) = ctx.get("/api/products").await;
    assert_eq!(status, StatusCode::OK);

    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 4);

    let cushion = &cards[0];
    assert_eq!(cushion["slug"], "glow-cushion");
    assert_eq!(cushion["description"], "Dewy glass skin finish.");
    assert_eq!(cushion["in_stock"], false);
    assert_eq!(cushion["add_to_cart"]["enabled"], false);
    assert_eq!(cushion["variant_id"], Value::Null);
    assert_eq!(option_values(cushion, "Color"), vec!["Pink", "Green"]);
    assert_eq!(option_values(cushion, "Size"), vec!["30ml", "50ml"]);

    let toner = &cards[1];
    assert_eq!(toner["options"], json!([]));
    assert_eq!(toner["price"], "$18.00");
    assert_eq!(toner["compare_at_price"], "$24.00");
    assert_eq!(toner["discount_percentage"], 25);
    assert_eq!(toner["add_to_cart"], json!({ "enabled": true, "label": "Add" }));
    assert_eq!(toner["badges"], json!([{ "kind": "discount", "label": "-25%" }]));

    let stick = &cards[2];
    assert_eq!(stick["in_stock"], false);
    assert_eq!(stick["add_to_cart"]["label"], "Out of stock");
}

#[tokio::test]
async fn test_product_listing_by_collection() {
    let ctx = context();
    let (status, body) = ctx.get("/api/products?collection=sun-care").await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["sun-stick"]);

    let (status, body) = ctx.get("/api/products?collection=lipsticks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: collection lipsticks");
}

#[tokio::test]
async fn test_selecting_color_hides_sold_out_size() {
    let ctx = context();
    let (status, card) = ctx.get("/api/products/glow-cushion?Color=Pink").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(option_values(&card, "Size"), vec!["50ml"]);
    assert_eq!(card["selection"], json!({ "Color": "Pink" }));
    assert_eq!(card["price"], "$38.00");
    assert_eq!(card["add_to_cart"]["enabled"], false);
}

#[tokio::test]
async fn test_complete_selection_resolves_variant() {
    let ctx = context();
    let (status, card) = ctx
        .get("/api/products/glow-cushion?Color=Pink&Size=50ml")
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(card["variant_id"], "pink-50");
    assert_eq!(card["price"], "$40.00");
    assert_eq!(card["compare_at_price"], "$50.00");
    assert_eq!(card["discount_percentage"], 20);
    assert_eq!(card["in_stock"], true);
    assert_eq!(card["add_to_cart"]["enabled"], true);
}

#[tokio::test]
async fn test_sold_out_combination() {
    let ctx = context();
    let (_, card) = ctx
        .get("/api/products/glow-cushion?Color=Pink&Size=30ml")
        .await;

    assert_eq!(card["variant_id"], "pink-30");
    assert_eq!(card["in_stock"], false);
    assert_eq!(card["add_to_cart"]["enabled"], false);
}

#[tokio::test]
async fn test_undeclared_value_in_query() {
    let ctx = context();
    let (status, card) = ctx.get("/api/products/glow-cushion?Color=Blue").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(card["selection"], json!({ "Color": "Blue" }));
    assert_eq!(option_values(&card, "Color"), vec!["Pink", "Green"]);
    assert!(option_values(&card, "Size").is_empty());
    assert_eq!(card["variant_id"], Value::Null);
    assert_eq!(card["add_to_cart"]["enabled"], false);
}

#[tokio::test]
async fn test_unknown_product() {
    let ctx = context();
    let (status, body) = ctx.get("/api/products/no-such-thing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: product no-such-thing");
}

#[tokio::test]
async fn test_option_change() {
    let ctx = context();
    let (status, card) = ctx
        .post(
            "/api/products/glow-cushion/options",
            &json!({ "selection": { "Color": "Green" }, "option": "Size", "value": "50ml" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["selection"], json!({ "Color": "Green", "Size": "50ml" }));
    assert_eq!(card["variant_id"], "green-50");
    assert_eq!(card["price"], "$44.00");
    assert_eq!(card["compare_at_price"], Value::Null);

    // Switching color keeps the chosen size.
    let (_, card) = ctx
        .post(
            "/api/products/glow-cushion/options",
            &json!({ "selection": card["selection"], "option": "Color", "value": "Pink" }),
        )
        .await;
    assert_eq!(card["variant_id"], "pink-50");
}

#[tokio::test]
async fn test_option_change_rejects_unknown_option() {
    let ctx = context();
    let (status, _) = ctx
        .post(
            "/api/products/glow-cushion/options",
            &json!({ "option": "Scent", "value": "Rose" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx
        .post(
            "/api/products/glow-cushion/options",
            &json!({ "option": "Color", "value": "Blue" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_add_variant_to_cart() {
    let ctx = context();
    let (status, line) = ctx
        .post(
            "/api/cart/add",
            &json!({
                "slug": "glow-cushion",
                "selection": { "Color": "Pink", "Size": "50ml" },
                "quantity": 2
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        line,
        json!({
            "merchandise_id": "pink-50",
            "product_id": "p-cushion",
            "quantity": 2,
            "unit_price": "$40.00"
        })
    );
}

#[tokio::test]
async fn test_add_simple_product_to_cart() {
    let ctx = context();
    let (status, line) = ctx
        .post("/api/cart/add", &json!({ "slug": "rice-toner" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["merchandise_id"], "p-toner");
    assert_eq!(line["quantity"], 1);
}

#[tokio::test]
async fn test_add_to_cart_rejections() {
    let ctx = context();

    let (status, _) = ctx
        .post(
            "/api/cart/add",
            &json!({ "slug": "glow-cushion", "selection": { "Color": "Pink", "Size": "30ml" } }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = ctx
        .post(
            "/api/cart/add",
            &json!({ "slug": "glow-cushion", "selection": { "Color": "Pink" } }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = ctx
        .post("/api/cart/add", &json!({ "slug": "sun-stick" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = ctx
        .post("/api/cart/add", &json!({ "slug": "rice-toner", "quantity": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request: quantity must be at least 1");

    let (status, body) = ctx
        .post("/api/cart/add", &json!({ "slug": "rice-toner", "quantity": -1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request: quantity must be at least 1");

    let (status, body) = ctx
        .post(
            "/api/cart/add",
            &json!({ "slug": "rice-toner", "quantity": 5_000_000_000_i64 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad request: quantity is too large");

    let (status, _) = ctx
        .post("/api/cart/add", &json!({ "slug": "nope" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Collections and landing page
// ============================================================================

#[tokio::test]
async fn test_collections() {
    let ctx = context();
    let (status, body) = ctx.get("/api/collections").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["description"], "Serums and essences");
}

#[tokio::test]
async fn test_home_sections() {
    let ctx = context();
    let (status, home) = ctx.get("/api/home").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(home["collection"], Value::Null);
    assert_eq!(home["featured"].as_array().unwrap().len(), 4);
    assert_eq!(home["treatments"][0]["slug"], "snail-serum");

    let sun = &home["sun_protection"][0];
    assert_eq!(sun["slug"], "sun-stick");
    assert_eq!(sun["spf"], "SPF 50+");
    assert_eq!(sun["finish"], "Invisible");
    assert_eq!(sun["texture"], "Gel");
    assert_eq!(sun["price"], "$22.00");
}

#[tokio::test]
async fn test_home_sections_for_collection() {
    let ctx = context();
    let (status, home) = ctx.get("/api/home?collection=treatments").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(home["collection"], "treatments");
    assert_eq!(home["sun_protection"], json!([]));
    let featured: Vec<_> = home["featured"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(featured, vec!["snail-serum"]);
}
