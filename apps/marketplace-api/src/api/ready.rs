//! `GET /api/ready`: store reachability for orchestrators.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use domain_catalog::CatalogRepository;
use serde_json::json;

use crate::state::AppState;

pub fn router<R: CatalogRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/ready", get(readiness_check::<R>))
        .with_state(state)
}

/// Ready when the store answers a ping, or when no store is configured.
async fn readiness_check<R: CatalogRepository>(State(state): State<AppState<R>>) -> Response {
    if !state.catalog.is_configured() {
        return (
            StatusCode::OK,
            Json(json!({"status": "ready", "database": "not configured"})),
        )
            .into_response();
    }

    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            match state.catalog.ping().await {
                Some(result) => result.map_err(|e| e.to_string()),
                None => Err("database not configured".to_string()),
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(unavailable) => unavailable.into_response(),
    }
}
