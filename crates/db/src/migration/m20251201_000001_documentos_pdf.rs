//! Attachment table.
//!
//! One PDF per (`tipo`, `numero`); the unique index backs the upsert.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DOCUMENTOS_PDF_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS documentos_pdf CASCADE;")
            .await?;
        Ok(())
    }
}

const DOCUMENTOS_PDF_SQL: &str = r"
-- PDF attachments for budgets (tipo = 1) and purchase orders (tipo = 2)
CREATE TABLE IF NOT EXISTS documentos_pdf (
    id BIGSERIAL PRIMARY KEY,
    tipo SMALLINT NOT NULL,
    numero BIGINT NOT NULL,
    fecha_creacion TIMESTAMPTZ NOT NULL DEFAULT now(),
    pdf BYTEA NOT NULL,
    CONSTRAINT chk_documentos_pdf_tipo CHECK (tipo IN (1, 2))
);

CREATE UNIQUE INDEX IF NOT EXISTS uq_documentos_pdf_tipo_numero
    ON documentos_pdf (tipo, numero);
";
