//! Handler tests for the Catalog domain
//!
//! These drive the catalog router directly against the in-memory repository:
//! - Query string parsing and validation
//! - Response envelopes and status codes
//! - Seeding and the unavailable-store fallbacks

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seeded_app() -> Router {
    let service = CatalogService::new(InMemoryCatalogRepository::new());
    service.seed().await.unwrap();
    handlers::router(service)
}

fn unavailable_app() -> Router {
    handlers::router(CatalogService::<InMemoryCatalogRepository>::unavailable())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

fn titles(page: &Value) -> Vec<&str> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_category_and_min_price_filter() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/products?category=Electronics&min_price=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Wireless Noise-Canceling Headphones"]);
    assert_eq!(body["items"][0]["price"], json!(199.99));
    assert_eq!(body["total"], 1);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn test_vendors_default_to_verified() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/vendors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);
    assert_eq!(body["items"][0]["name"], "Urban Outfitters");
    assert!(
        body["items"]
            .as_array()
            .unwrap()
            .iter()
            .all(|v| v["verified"] == json!(true))
    );

    let (_, unverified) = get(&app, "/vendors?verified=false").await;
    assert_eq!(unverified, json!({"items": [], "page": 1, "pages": 0, "total": 0}));
}

#[tokio::test]
async fn test_products_envelope_and_paging() {
    let app = seeded_app().await;

    let (_, first) = get(&app, "/products").await;
    assert_eq!(first["total"], 5);
    assert_eq!(first["pages"], 1);
    assert_eq!(titles(&first)[0], "Vintage Denim Jacket");

    let (_, last) = get(&app, "/products?page=3&limit=2").await;
    assert_eq!(titles(&last), ["Silk Scarf"]);
    assert_eq!(last["pages"], 3);

    let (status, past_end) = get(&app, "/products?page=9&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(past_end["items"].as_array().unwrap().is_empty());
    assert_eq!(past_end["page"], 9);
    assert_eq!(past_end["total"], 5);

    let (status, far) = get(&app, &format!("/products?page={}&limit=100", u64::MAX)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(far["items"].as_array().unwrap().is_empty());
    assert_eq!(far["total"], 5);
}

#[tokio::test]
async fn test_text_search_is_case_insensitive_and_literal() {
    let app = seeded_app().await;

    let (_, scarf) = get(&app, "/products?q=SCARF").await;
    assert_eq!(titles(&scarf), ["Silk Scarf"]);

    let (_, by_description) = get(&app, "/products?q=coffee").await;
    assert_eq!(titles(&by_description), ["Handmade Ceramic Mug"]);

    let (status, pattern) = get(&app, "/products?q=.*").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pattern["total"], 0);

    let (_, blank) = get(&app, "/products?q=&category=").await;
    assert_eq!(blank["total"], 5);
}

#[tokio::test]
async fn test_price_range_and_stock_filters() {
    let app = seeded_app().await;

    let (_, mid) = get(&app, "/products?min_price=20&max_price=80").await;
    assert_eq!(
        titles(&mid),
        ["Vintage Denim Jacket", "Handmade Ceramic Mug", "Silk Scarf"]
    );

    let (_, out_of_stock) = get(&app, "/products?in_stock=false").await;
    assert_eq!(out_of_stock["total"], 0);

    let (_, in_stock) = get(&app, "/products?in_stock=true").await;
    assert_eq!(in_stock["total"], 5);
}

#[tokio::test]
async fn test_categories_sorted_and_distinct() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/products/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["Accessories", "Electronics", "Fashion", "Groceries", "Home"])
    );
}

#[tokio::test]
async fn test_invalid_parameters_rejected() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/products?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["limit"].is_array());

    let (status, body) = get(&app, "/products?limit=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["limit"].is_array());

    let (status, body) = get(&app, "/products?min_price=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["min_price"].is_array());

    for bad in ["NaN", "inf"] {
        let (status, body) = get(&app, &format!("/products?min_price={bad}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "min_price={bad}");
        assert!(body["details"]["min_price"].is_array());

        let (status, body) = get(&app, &format!("/products?max_price={bad}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "max_price={bad}");
        assert!(body["details"]["max_price"].is_array());
    }

    let (status, body) = get(&app, "/vendors?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["page"].is_array());

    let (status, body) = get(&app, "/products?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_QUERY");
    assert!(body["message"].as_str().unwrap().contains("page"));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let app = handlers::router(CatalogService::new(InMemoryCatalogRepository::new()));

    let expected = json!({"status": "ok", "vendors": 4, "products": 5});

    let (status, first) = post(&app, "/seed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, expected);

    let (_, second) = post(&app, "/seed").await;
    assert_eq!(second, expected);

    let (_, products) = get(&app, "/products").await;
    assert_eq!(products["total"], 5);
}

#[tokio::test]
async fn test_detail_endpoints() {
    let app = seeded_app().await;

    let (_, products) = get(&app, "/products?category=Accessories").await;
    let product = &products["items"][0];
    let product_id = product["id"].as_str().unwrap();
    let vendor_id = product["vendor_id"].as_str().unwrap();

    let (status, fetched) = get(&app, &format!("/products/{product_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&fetched, product);

    let (status, vendor) = get(&app, &format!("/vendors/{vendor_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vendor["name"], "Urban Outfitters");

    let unknown = TestDataBuilder::from_test_name("detail_endpoints").object_id_hex(1);
    let (status, missing) = get(&app, &format!("/products/{unknown}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["code"], 1004);
    assert_eq!(missing["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unavailable_store_neutral_responses() {
    let app = unavailable_app();

    let (status, products) = get(&app, "/products?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products, json!({"items": [], "page": 2, "pages": 0, "total": 0}));

    let (_, vendors) = get(&app, "/vendors").await;
    assert_eq!(vendors, json!({"items": [], "page": 1, "pages": 0, "total": 0}));

    let (_, categories) = get(&app, "/products/categories").await;
    assert_eq!(categories, json!([]));

    let (status, seed) = post(&app, "/seed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        seed,
        json!({"status": "error", "message": "Database not configured"})
    );

    let (status, _) = get(&app, "/vendors/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unavailable_store_still_validates() {
    let app = unavailable_app();

    let (status, _) = get(&app, "/products?limit=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
