//! Health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Service banner.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "API de aprobaciones de presupuestos y órdenes de compra",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api/v1"
    }))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
