//! HTTP handlers for the Catalog API

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{
        BadRequestQueryResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{EntityId, Product, Vendor};
use crate::pagination::Page;
use crate::query::{ProductQuery, VendorQuery};
use crate::repository::CatalogRepository;
use crate::seed::SeedOutcome;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_categories,
        get_product,
        list_vendors,
        get_vendor,
        seed,
    ),
    components(
        schemas(Product, Vendor, EntityId, SeedOutcome),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Multivendor product catalog")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/products/categories", get(list_categories))
        .route("/products/{id}", get(get_product))
        .route("/vendors", get(list_vendors))
        .route("/vendors/{id}", get(get_vendor))
        .route("/seed", post(seed))
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "/products",
    tag = "Catalog",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = Page<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ProductQuery>,
) -> CatalogResult<Json<Page<Product>>> {
    let page = service.list_products(&query).await?;
    Ok(Json(page))
}

/// Distinct product categories, sorted
#[utoipa::path(
    get,
    path = "/products/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "Category names", body = Vec<String>,
            example = json!(["Accessories", "Electronics", "Fashion"])),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<Vec<String>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<EntityId>,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// List vendors, verified ones by default
#[utoipa::path(
    get,
    path = "/vendors",
    tag = "Catalog",
    params(VendorQuery),
    responses(
        (status = 200, description = "One page of matching vendors", body = Page<Vendor>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_vendors<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedQuery(query): ValidatedQuery<VendorQuery>,
) -> CatalogResult<Json<Page<Vendor>>> {
    let page = service.list_vendors(&query).await?;
    Ok(Json(page))
}

/// Get a vendor by ID
#[utoipa::path(
    get,
    path = "/vendors/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Vendor ID")
    ),
    responses(
        (status = 200, description = "Vendor found", body = Vendor),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_vendor<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<EntityId>,
) -> CatalogResult<Json<Vendor>> {
    let vendor = service.get_vendor(&id).await?;
    Ok(Json(vendor))
}

/// Insert demo vendors and products into empty collections
///
/// Answers 200 with `status: "error"` when no database is configured.
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Catalog",
    responses(
        (status = 200, description = "Collection counts, or an error status without a database", body = SeedOutcome,
            example = json!({"status": "ok", "vendors": 4, "products": 5})),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<SeedOutcome>> {
    let outcome = service.seed().await?;
    Ok(Json(outcome))
}
