//! API routes module
//!
//! App-level endpoints live here; the catalog endpoints come from
//! `domain_catalog::handlers`.

pub mod ready;
pub mod root;
pub mod status;

use axum::Router;
use domain_catalog::{CatalogRepository, handlers};

use crate::state::AppState;

/// Routes nested under /api by axum_helpers::create_router
pub fn routes<R: CatalogRepository + 'static>(state: &AppState<R>) -> Router {
    Router::new()
        .merge(handlers::router(state.catalog.clone()))
        .merge(ready::router(state.clone()))
}

/// Routes served at the root path
pub fn root_routes<R: CatalogRepository + 'static>(state: &AppState<R>) -> Router {
    Router::new()
        .merge(root::router())
        .merge(status::router(state.clone()))
}
