//! Service identity and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body returned by `GET /`
pub const SERVICE_IDENTITY: &str = "contact API";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn identity() -> Json<&'static str> {
    Json(SERVICE_IDENTITY)
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Identity and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(identity))
        .route("/health", get(health))
}
