//! `GET /test`: human-readable store diagnostics.
//!
//! Always answers 200. Store failures are folded into the body.

use axum::{Json, Router, extract::State, routing::get};
use domain_catalog::{CatalogRepository, CatalogResult};
use serde::Serialize;

use crate::config::DatabaseEnv;
use crate::state::AppState;

/// Characters of a store error kept in the report
const ERROR_EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

impl StatusResponse {
    /// Build the report from a collection listing attempt; `None` means no store.
    pub fn from_listing(listing: Option<CatalogResult<Vec<String>>>, env: DatabaseEnv) -> Self {
        let mut response = Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: presence(env.url_set),
            database_name: presence(env.name_set),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        match listing {
            None => {
                response.database = "⚠️  Available but not initialized".to_string();
            }
            Some(result) => {
                response.connection_status = "Connected".to_string();
                match result {
                    Ok(collections) => {
                        response.database = "✅ Connected & Working".to_string();
                        response.collections = collections;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Listing collections failed");
                        let excerpt: String =
                            e.to_string().chars().take(ERROR_EXCERPT_CHARS).collect();
                        response.database = format!("⚠️  Connected but Error: {excerpt}");
                    }
                }
            }
        }

        response
    }
}

pub fn router<R: CatalogRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/test", get(status::<R>))
        .with_state(state)
}

async fn status<R: CatalogRepository>(State(state): State<AppState<R>>) -> Json<StatusResponse> {
    let listing = state.catalog.collection_names().await;
    Json(StatusResponse::from_listing(listing, state.database_env))
}
