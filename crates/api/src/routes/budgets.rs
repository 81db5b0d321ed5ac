//! Budget (`cot013`) routes: indicators, listings and stage-2 toggling.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiResult, middleware::CurrentUser};
use aprobaciones_core::approval::ApprovalFlag;
use aprobaciones_core::{DocumentKey, DocumentKind};
use aprobaciones_db::entities::budgets;
use aprobaciones_db::{ApprovedBudgetFilter, BudgetIndicators, BudgetRepository};
use aprobaciones_shared::types::{DEFAULT_LIMIT, DateRange, PageRequest};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/presupuestos/indicadores", get(indicators))
        .route("/presupuestos/pendientes", get(list_pending))
        .route("/presupuestos/aprobados", get(list_approved))
        .route("/presupuestos/aprobar", post(approve))
        .route("/presupuestos/desaprobar", post(unapprove))
}

// ============================================================================
// Request/Response Types
// ============================================================================

const fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Query for the approved listing.
#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    /// Rows to skip.
    #[serde(default)]
    pub skip: u64,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Approver code, matched case-insensitively.
    pub usuario: Option<String>,
    /// Inclusive lower bound on the approval date.
    pub fecha_desde: Option<NaiveDate>,
    /// Inclusive upper bound on the approval date.
    pub fecha_hasta: Option<NaiveDate>,
}

/// Key of the budget to toggle.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct BudgetKeyRequest {
    /// Location code.
    pub Loc_cod: i16,
    /// Budget number.
    pub pre_nro: i64,
}

impl BudgetKeyRequest {
    const fn key(&self) -> DocumentKey {
        DocumentKey::new(self.Loc_cod, self.pre_nro)
    }
}

/// Counts shown on the budget dashboard.
#[derive(Debug, Serialize)]
pub struct BudgetIndicatorsResponse {
    /// Released budgets awaiting management.
    pub pendientes: u64,
    /// Budgets signed off by management.
    pub aprobados: u64,
}

impl From<BudgetIndicators> for BudgetIndicatorsResponse {
    fn from(i: BudgetIndicators) -> Self {
        Self {
            pendientes: i.pendientes,
            aprobados: i.aprobados,
        }
    }
}

/// Outcome of a toggle.
#[derive(Debug, Serialize)]
pub struct BudgetToggleResponse {
    /// Human readable result.
    pub message: &'static str,
    /// Budget number.
    pub pre_nro: i64,
    /// `aprobado` or `pendiente`.
    pub new_status: &'static str,
}

/// A budget row as listed to clients.
#[derive(Debug, Serialize)]
#[allow(non_snake_case, missing_docs)]
pub struct BudgetResponse {
    pub Loc_cod: i16,
    pub pre_nro: i64,
    pub pre_est: String,
    pub pre_fec: NaiveDate,
    pub pre_rut: i64,
    pub pre_VenCod: i16,
    pub Pre_Neto: i64,
    pub Pre_vbLib: i16,
    pub pre_vbgg: i16,
    pub pre_gl1: String,
    pub pre_fecAdj: NaiveDate,
    pub pre_VbLibUsu: Option<String>,
    pub Pre_VBLibDt: Option<NaiveDate>,
    pub pre_vbggUsu: Option<String>,
    pub pre_vbggDt: Option<NaiveDate>,
    pub pre_trnFec: NaiveDate,
    pub pre_trnusu: String,
    /// Whether a PDF is stored for this budget.
    pub tiene_pdf: bool,
}

impl BudgetResponse {
    fn new(m: budgets::Model, tiene_pdf: bool) -> Self {
        let released = ApprovalFlag::from_column(m.vb_lib).is_set();
        let managed = ApprovalFlag::from_column(m.vbgg).is_set();

        Self {
            Loc_cod: m.loc_cod,
            pre_nro: m.pre_nro,
            pre_est: m.pre_est.trim_end().to_string(),
            pre_fec: m.pre_fec,
            pre_rut: m.pre_rut,
            pre_VenCod: m.pre_ven_cod,
            Pre_Neto: m.pre_neto,
            Pre_vbLib: m.vb_lib,
            pre_vbgg: m.vbgg,
            pre_gl1: m.pre_gl1.trim_end().to_string(),
            pre_fecAdj: m.pre_fec_adj,
            pre_VbLibUsu: released.then(|| m.vb_lib_usu.trim_end().to_string()),
            Pre_VBLibDt: released.then_some(m.vb_lib_dt),
            pre_vbggUsu: managed.then(|| m.vbgg_usu.trim_end().to_string()),
            pre_vbggDt: managed.then_some(m.vbgg_dt),
            pre_trnFec: m.pre_trn_fec,
            pre_trnusu: m.pre_trnusu.trim_end().to_string(),
            tiene_pdf,
        }
    }
}

async fn with_pdf_flags(
    state: &AppState,
    rows: Vec<budgets::Model>,
) -> ApiResult<Vec<BudgetResponse>> {
    let numbers: Vec<i64> = rows.iter().map(|b| b.pre_nro).collect();
    let flags = state
        .attachments
        .attachment_flags(DocumentKind::Budget, &numbers)
        .await?;

    Ok(rows
        .into_iter()
        .zip(flags)
        .map(|(row, tiene_pdf)| BudgetResponse::new(row, tiene_pdf))
        .collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /presupuestos/indicadores - Pending and approved counts.
async fn indicators(State(state): State<AppState>) -> ApiResult<Json<BudgetIndicatorsResponse>> {
    let repo = BudgetRepository::new(Arc::clone(&state.legacy_db));
    Ok(Json(repo.indicators().await?.into()))
}

/// GET /presupuestos/pendientes - Released budgets awaiting management.
async fn list_pending(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> ApiResult<Json<Vec<BudgetResponse>>> {
    let page = page.validate()?;
    let repo = BudgetRepository::new(Arc::clone(&state.legacy_db));
    let rows = repo.list_pending(page).await?;

    Ok(Json(with_pdf_flags(&state, rows).await?))
}

/// GET /presupuestos/aprobados - Budgets signed off by management.
async fn list_approved(
    State(state): State<AppState>,
    Query(query): Query<ApprovedQuery>,
) -> ApiResult<Json<Vec<BudgetResponse>>> {
    let page = PageRequest::new(query.skip, query.limit).validate()?;
    let filter = ApprovedBudgetFilter {
        usuario: query.usuario.filter(|u| !u.trim().is_empty()),
        range: DateRange::from_optional(query.fecha_desde, query.fecha_hasta)?,
    };

    let repo = BudgetRepository::new(Arc::clone(&state.legacy_db));
    let rows = repo.list_approved(&filter, page).await?;

    Ok(Json(with_pdf_flags(&state, rows).await?))
}

/// POST /presupuestos/aprobar - Management sign-off.
async fn approve(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<BudgetKeyRequest>,
) -> ApiResult<Json<BudgetToggleResponse>> {
    let repo = BudgetRepository::new(Arc::clone(&state.legacy_db));
    let updated = repo
        .approve(payload.key(), &user.code, state.clock.now())
        .await?;

    Ok(Json(BudgetToggleResponse {
        message: "Presupuesto aprobado exitosamente",
        pre_nro: updated.pre_nro,
        new_status: ApprovalFlag::from_column(updated.vbgg).status().as_str(),
    }))
}

/// POST /presupuestos/desaprobar - Revert the management sign-off.
async fn unapprove(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(payload): Json<BudgetKeyRequest>,
) -> ApiResult<Json<BudgetToggleResponse>> {
    let repo = BudgetRepository::new(Arc::clone(&state.legacy_db));
    let updated = repo.unapprove(payload.key()).await?;

    Ok(Json(BudgetToggleResponse {
        message: "Aprobación deshecha exitosamente",
        pre_nro: updated.pre_nro,
        new_status: ApprovalFlag::from_column(updated.vbgg).status().as_str(),
    }))
}
