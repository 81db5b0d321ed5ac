//! User listing routes. The secret column is never exposed.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{AppState, error::ApiResult};
use aprobaciones_db::{UserRepository, entities::users};
use aprobaciones_shared::types::PageRequest;

/// Creates the user routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users))
        .route("/usuarios/count", get(count_users))
}

/// A `ctbm01` row without `UserLlave`.
#[derive(Debug, Serialize)]
#[allow(non_snake_case, missing_docs)]
pub struct UserResponse {
    pub UserCd: String,
    pub UserDs: String,
    pub UserCta: i16,
    pub UserParam: i16,
    pub UserMaes: i16,
    pub UserMovi: i16,
    pub UserUti: i16,
    pub UserCon: i16,
    pub UserPerf: i16,
    pub UserFolDte: String,
    pub UserDte: i16,
    pub UserChPass: String,
    pub UserNameMail: String,
    pub UserMail: String,
}

impl From<users::Model> for UserResponse {
    fn from(m: users::Model) -> Self {
        Self {
            UserCd: m.user_cd.trim_end().to_string(),
            UserDs: m.user_ds.trim_end().to_string(),
            UserCta: m.user_cta,
            UserParam: m.user_param,
            UserMaes: m.user_maes,
            UserMovi: m.user_movi,
            UserUti: m.user_uti,
            UserCon: m.user_con,
            UserPerf: m.user_perf,
            UserFolDte: m.user_fol_dte.trim_end().to_string(),
            UserDte: m.user_dte,
            UserChPass: m.user_ch_pass.trim_end().to_string(),
            UserNameMail: m.user_name_mail.trim_end().to_string(),
            UserMail: m.user_mail.trim_end().to_string(),
        }
    }
}

/// GET /usuarios - List users ordered by name.
async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let page = page.validate()?;
    let repo = UserRepository::new(Arc::clone(&state.legacy_db));
    let users = repo.list(page).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /usuarios/count - Total number of users.
async fn count_users(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = UserRepository::new(Arc::clone(&state.legacy_db));
    let total = repo.count().await?;

    Ok(Json(json!({ "total": total })))
}
