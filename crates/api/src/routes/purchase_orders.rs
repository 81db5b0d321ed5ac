//! Purchase order (`adq004`) routes: indicators, listings and A1 toggling.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    middleware::CurrentUser,
};
use aprobaciones_core::approval::ApprovalFlag;
use aprobaciones_core::purchase_order::{OrderAmounts, supplier_name};
use aprobaciones_core::{DocumentKey, DocumentKind};
use aprobaciones_db::{OrderIndicators, OrderWithSupplier, PurchaseOrderRepository};
use aprobaciones_shared::types::{DEFAULT_LIMIT, DateRange, PageRequest};

/// Creates the purchase order routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ordenes-compra/indicadores", get(indicators))
        .route("/ordenes-compra/pendientes", get(list_pending))
        .route("/ordenes-compra/aprobados", get(list_approved))
        .route("/ordenes-compra/aprobar", post(approve))
        .route("/ordenes-compra/desaprobar", post(unapprove))
}

// ============================================================================
// Request/Response Types
// ============================================================================

const fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Query for the approved listing. Both dates are required.
#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    /// Rows to skip.
    #[serde(default)]
    pub skip: u64,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Inclusive lower bound on the A1 date.
    pub fecha_desde: Option<NaiveDate>,
    /// Inclusive upper bound on the A1 date.
    pub fecha_hasta: Option<NaiveDate>,
}

impl ApprovedQuery {
    fn range(&self) -> ApiResult<DateRange> {
        DateRange::from_optional(self.fecha_desde, self.fecha_hasta)?
            .ok_or_else(|| ApiError::validation("fecha_desde y fecha_hasta son obligatorias"))
    }
}

/// Key of the order to toggle.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct OrderKeyRequest {
    /// Location code.
    pub Loc_cod: i16,
    /// Order number.
    pub ocp_nro: i64,
}

impl OrderKeyRequest {
    const fn key(&self) -> DocumentKey {
        DocumentKey::new(self.Loc_cod, self.ocp_nro)
    }
}

/// Outcome of a toggle.
#[derive(Debug, Serialize)]
pub struct OrderToggleResponse {
    /// Human readable result.
    pub message: &'static str,
    /// Order number.
    pub ocp_nro: i64,
    /// `aprobado` or `pendiente`.
    pub new_status: &'static str,
}

/// Counts shown on the purchase order dashboard.
#[derive(Debug, Serialize)]
pub struct OrderIndicatorsResponse {
    /// Listable orders not yet released.
    pub pendientes_count: u64,
    /// Orders the caller released today.
    pub aprobados_hoy_count: u64,
}

impl From<OrderIndicators> for OrderIndicatorsResponse {
    fn from(i: OrderIndicators) -> Self {
        Self {
            pendientes_count: i.pendientes_count,
            aprobados_hoy_count: i.aprobados_hoy_count,
        }
    }
}

/// A purchase order as listed to clients.
#[derive(Debug, Serialize)]
#[allow(non_snake_case, missing_docs)]
pub struct OrderResponse {
    pub Loc_cod: i16,
    pub ocp_nro: i64,
    pub ocp_fec: NaiveDate,
    pub ocp_fee: NaiveDate,
    pub pro_rut: i32,
    pub ocp_pdt: String,
    pub ocp_net: i64,
    pub ocp_iva: i64,
    pub ocp_ila: i32,
    pub proveedor_nombre: String,
    pub monto_total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocp_A1_Usu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocp_A1_Dt: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocp_A1_Hr: Option<String>,
    /// Whether a PDF is stored for this order.
    pub tiene_pdf: bool,
}

impl OrderResponse {
    fn new((order, supplier): OrderWithSupplier, tiene_pdf: bool) -> Self {
        let released = ApprovalFlag::from_column(order.a1_ap).is_set();
        let amounts = OrderAmounts {
            net: order.ocp_net,
            iva: order.ocp_iva,
            ila: i64::from(order.ocp_ila),
        };

        Self {
            Loc_cod: order.loc_cod,
            ocp_nro: order.ocp_nro,
            ocp_fec: order.ocp_fec,
            ocp_fee: order.ocp_fee,
            pro_rut: order.pro_rut,
            ocp_pdt: order.ocp_pdt,
            ocp_net: order.ocp_net,
            ocp_iva: order.ocp_iva,
            ocp_ila: order.ocp_ila,
            proveedor_nombre: supplier_name(supplier.as_ref().map(|s| s.pro_nom.as_str())),
            monto_total: amounts.total(),
            ocp_A1_Usu: released.then(|| order.a1_usu.trim_end().to_string()),
            ocp_A1_Dt: released.then_some(order.a1_dt),
            ocp_A1_Hr: released.then(|| order.a1_hr.trim_end().to_string()),
            tiene_pdf,
        }
    }
}

async fn with_pdf_flags(
    state: &AppState,
    rows: Vec<OrderWithSupplier>,
) -> ApiResult<Vec<OrderResponse>> {
    let numbers: Vec<i64> = rows.iter().map(|(o, _)| o.ocp_nro).collect();
    let flags = state
        .attachments
        .attachment_flags(DocumentKind::PurchaseOrder, &numbers)
        .await?;

    Ok(rows
        .into_iter()
        .zip(flags)
        .map(|(row, tiene_pdf)| OrderResponse::new(row, tiene_pdf))
        .collect())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /ordenes-compra/indicadores - Pending count and today's releases by the caller.
async fn indicators(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<OrderIndicatorsResponse>> {
    let repo = PurchaseOrderRepository::new(Arc::clone(&state.legacy_db));
    let indicators = repo.indicators(&user.code, state.clock.today()).await?;

    Ok(Json(indicators.into()))
}

/// GET /ordenes-compra/pendientes - Orders waiting for release.
async fn list_pending(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    let page = page.validate()?;
    let repo = PurchaseOrderRepository::new(Arc::clone(&state.legacy_db));
    let rows = repo.list_pending(page).await?;

    Ok(Json(with_pdf_flags(&state, rows).await?))
}

/// GET /ordenes-compra/aprobados - Orders the caller released within a date range.
async fn list_approved(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ApprovedQuery>,
) -> ApiResult<Json<Vec<OrderResponse>>> {
    let page = PageRequest::new(query.skip, query.limit).validate()?;
    let range = query.range()?;

    let repo = PurchaseOrderRepository::new(Arc::clone(&state.legacy_db));
    let rows = repo.list_approved(&user.code, range, page).await?;

    Ok(Json(with_pdf_flags(&state, rows).await?))
}

/// POST /ordenes-compra/aprobar - Release an order.
async fn approve(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<OrderKeyRequest>,
) -> ApiResult<Json<OrderToggleResponse>> {
    let repo = PurchaseOrderRepository::new(Arc::clone(&state.legacy_db));
    let updated = repo
        .approve(payload.key(), &user.code, state.clock.now())
        .await?;

    Ok(Json(OrderToggleResponse {
        message: "Orden aprobada exitosamente",
        ocp_nro: updated.ocp_nro,
        new_status: ApprovalFlag::from_column(updated.a1_ap).status().as_str(),
    }))
}

/// POST /ordenes-compra/desaprobar - Revert a release.
async fn unapprove(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(payload): Json<OrderKeyRequest>,
) -> ApiResult<Json<OrderToggleResponse>> {
    let repo = PurchaseOrderRepository::new(Arc::clone(&state.legacy_db));
    let updated = repo.unapprove(payload.key()).await?;

    Ok(Json(OrderToggleResponse {
        message: "Aprobación deshecha exitosamente",
        ocp_nro: updated.ocp_nro,
        new_status: ApprovalFlag::from_column(updated.a1_ap).status().as_str(),
    }))
}
