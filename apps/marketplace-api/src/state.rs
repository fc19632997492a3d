//! Application state management.
//!
//! This module defines the shared application state passed to the
//! app-level handlers (root, status, readiness).

use domain_catalog::{CatalogRepository, CatalogService, MongoCatalogRepository};

use crate::config::DatabaseEnv;

/// Shared application state.
///
/// Cloning is cheap: the catalog service holds its store behind an `Arc`.
pub struct AppState<R: CatalogRepository = MongoCatalogRepository> {
    /// Catalog service, possibly without a store
    pub catalog: CatalogService<R>,
    /// Presence of the database variables, reported by `/test`
    pub database_env: DatabaseEnv,
}

impl<R: CatalogRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            database_env: self.database_env,
        }
    }
}
