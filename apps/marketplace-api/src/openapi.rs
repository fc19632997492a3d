//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Multivendor Ecommerce API",
        version = "0.1.0",
        description = "Vendors and products of a multivendor marketplace, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Product and vendor listings, demo seeding")
    )
)]
pub struct ApiDoc;
