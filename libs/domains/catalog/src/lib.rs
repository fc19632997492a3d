//! Catalog Domain
//!
//! Vendors and the products they sell, stored in MongoDB collections `vendor`
//! and `product`. Read-only over HTTP apart from demo seeding.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, query validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pagination, seeding, unavailable-store fallbacks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records, creation DTOs, filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("marketplace");
//!
//! let repository = MongoCatalogRepository::new(&db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```
//!
//! Without a database, [`CatalogService::unavailable`] keeps the same routes
//! answering with empty pages.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod seed;
pub mod serialization;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryCatalogRepository;
pub use models::{EntityId, NewProduct, NewVendor, Product, Vendor};
pub use mongodb::MongoCatalogRepository;
pub use pagination::{Page, Pagination};
pub use query::{ProductFilter, ProductQuery, VendorFilter, VendorQuery};
pub use repository::CatalogRepository;
pub use seed::SeedOutcome;
pub use service::CatalogService;
