//! Bearer token guard for protected routes.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::{AppState, error::ApiError};
use aprobaciones_db::UserRepository;
use aprobaciones_shared::JwtError;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

fn unauthorized(error: &str, message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}

/// Authentication middleware that validates JWT tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates signature and expiry
/// 3. Resolves the subject back to a `ctbm01` row
/// 4. Stores the [`CurrentUser`] in request extensions
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return unauthorized(
            "missing_token",
            "Authorization header with Bearer token is required",
        );
    };

    let claims = match state.jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(JwtError::Expired) => return unauthorized("token_expired", "Token has expired"),
        Err(_) => return unauthorized("invalid_token", "Invalid or malformed token"),
    };

    let user_repo = UserRepository::new(Arc::clone(&state.legacy_db));
    let user = match user_repo.find_by_code(claims.user_code()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(user = claims.user_code(), "token subject no longer exists");
            return unauthorized("unknown_user", "User no longer exists");
        }
        Err(e) => return ApiError::from(e).into_response(),
    };

    request.extensions_mut().insert(CurrentUser {
        code: user.user_cd.trim_end().to_string(),
        name: user.user_ds.trim_end().to_string(),
        profile: user.user_perf,
    });
    next.run(request).await
}

/// The authenticated legacy user.
///
/// ```ignore
/// async fn handler(user: CurrentUser) -> impl IntoResponse {
///     user.code
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// User code (`UserCd`).
    pub code: String,
    /// Display name (`UserDs`).
    pub name: String,
    /// Profile code (`UserPerf`).
    pub profile: i16,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().cloned().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "unauthorized",
                    "message": "Authentication required"
                })),
            )
        })
    }
}
