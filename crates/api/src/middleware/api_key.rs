//! Static API-key guard for the attachment routes.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::AppState;
use aprobaciones_core::auth::verify_secret;

/// Header carrying the key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `X-API-Key` does not match the configured key.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let accepted = !provided.is_empty() && verify_secret(state.api_key.as_deref(), provided).is_ok();
    if !accepted {
        warn!(path = %request.uri().path(), "rejected attachment request");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "invalid_api_key",
                "message": "Invalid or missing API Key"
            })),
        )
            .into_response();
    }

    next.run(request).await
}
