//! Migration runner for the PDF attachment store.
//!
//! Only `documentos_pdf` is managed here; the legacy ERP schema is never migrated.
//! Point `DATABASE_URL` at the attachment database before running.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status

use aprobaciones_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(Migrator).await;
}
