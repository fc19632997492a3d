use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Multivendor Ecommerce API running",
    })
}
