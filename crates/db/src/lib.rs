//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the legacy ERP tables (MySQL)
//! - The attachment table entity and its migration (PostgreSQL)
//! - Repository abstractions for data access

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    ApprovedBudgetFilter, BudgetIndicators, BudgetRepository, DocumentPdfRepository,
    OrderIndicators, OrderWithSupplier, PurchaseOrderRepository, UserRepository,
};

use std::time::Duration;

use aprobaciones_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to a database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}
