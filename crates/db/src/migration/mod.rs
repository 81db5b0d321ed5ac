//! Attachment store migrations.
//!
//! Migrations are managed using sea-orm-migration. The legacy ERP schema is
//! owned elsewhere and never migrated from here.

pub use sea_orm_migration::prelude::*;

mod m20251201_000001_documentos_pdf;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251201_000001_documentos_pdf::Migration)]
    }
}
