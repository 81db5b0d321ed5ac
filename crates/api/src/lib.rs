//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Bearer token and API-key guards
//! - Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use aprobaciones_core::approval::AuditClock;
use aprobaciones_core::attachment::AttachmentService;
use aprobaciones_db::DocumentPdfRepository;
use aprobaciones_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Legacy ERP connection pool (budgets, purchase orders, users).
    pub legacy_db: Arc<DatabaseConnection>,
    /// PDF attachments, backed by the attachment store.
    pub attachments: AttachmentService<DocumentPdfRepository>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Expected `X-API-Key` value. `None` rejects every attachment request.
    pub api_key: Option<Arc<str>>,
    /// Clock stamping approval audit columns.
    pub clock: AuditClock,
}

impl AppState {
    /// Builds the state from its connections and services.
    #[must_use]
    pub fn new(
        legacy_db: DatabaseConnection,
        attachments_db: DatabaseConnection,
        jwt_service: JwtService,
        api_key: Option<String>,
        clock: AuditClock,
    ) -> Self {
        Self {
            legacy_db: Arc::new(legacy_db),
            attachments: AttachmentService::new(Arc::new(DocumentPdfRepository::new(Arc::new(
                attachments_db,
            )))),
            jwt_service: Arc::new(jwt_service),
            api_key: api_key.filter(|k| !k.is_empty()).map(Arc::from),
            clock,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
