//! Authentication route: login against the legacy users table.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};
use aprobaciones_core::auth::{CredentialError, verify_secret};
use aprobaciones_db::UserRepository;
use aprobaciones_shared::AppError;
use aprobaciones_shared::auth::{LoginRequest, LoginResponse};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

fn rejected(err: &CredentialError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// POST /auth/login - Check legacy credentials and issue an access token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Response> {
    payload.validate().map_err(ApiError::validation)?;

    let user_repo = UserRepository::new(Arc::clone(&state.legacy_db));
    let user = user_repo.find_by_code(&payload.usuario).await?;

    let stored = user.as_ref().map(|u| u.user_llave.as_str());
    if let Err(err) = verify_secret(stored, &payload.password) {
        warn!(usuario = %payload.usuario, known = user.is_some(), "Failed login attempt");
        return Ok(rejected(&err));
    }
    let Some(user) = user else {
        return Ok(rejected(&CredentialError::InvalidCredentials));
    };

    let code = user.user_cd.trim_end().to_string();
    let access_token = state
        .jwt_service
        .generate_access_token(&code)
        .map_err(|e| ApiError(AppError::Internal(e.to_string())))?;

    info!(usuario = %code, "User logged in successfully");

    let response = LoginResponse::bearer(
        access_token,
        code,
        user.user_ds.trim_end().to_string(),
        state.jwt_service.access_token_expires_in(),
    );
    Ok((StatusCode::OK, Json(response)).into_response())
}
