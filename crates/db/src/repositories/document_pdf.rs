//! Attachment store backed by `documentos_pdf` (PostgreSQL).

use std::collections::HashSet;
use std::sync::Arc;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Insert, QueryFilter, QuerySelect, Set,
};
use tracing::info;

use aprobaciones_core::DocumentKind;
use aprobaciones_core::attachment::{
    Attachment, AttachmentError, AttachmentRef, AttachmentStore, UpsertOutcome,
};

use crate::entities::documentos_pdf;

/// Attachment repository implementation.
#[derive(Debug)]
pub struct DocumentPdfRepository {
    db: Arc<DatabaseConnection>,
}

impl DocumentPdfRepository {
    /// Create a new attachment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl AttachmentStore for DocumentPdfRepository {
    async fn find(
        &self,
        kind: DocumentKind,
        number: i64,
    ) -> Result<Option<Attachment>, AttachmentError> {
        let model = documentos_pdf::Entity::find()
            .filter(documentos_pdf::Column::Tipo.eq(kind.code()))
            .filter(documentos_pdf::Column::Numero.eq(number))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        model.map(to_domain).transpose()
    }

    async fn upsert(
        &self,
        kind: DocumentKind,
        number: i64,
        content: Vec<u8>,
    ) -> Result<UpsertOutcome, AttachmentError> {
        let existing: Option<i64> = documentos_pdf::Entity::find()
            .select_only()
            .column(documentos_pdf::Column::Id)
            .filter(documentos_pdf::Column::Tipo.eq(kind.code()))
            .filter(documentos_pdf::Column::Numero.eq(number))
            .into_tuple()
            .one(self.db.as_ref())
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        let size = content.len();
        let saved = upsert_statement(kind, number, content)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        // A concurrent first upload may land between the lookup and the
        // insert; the row is still correct, only the outcome says Created.
        let outcome = if existing.is_some() {
            UpsertOutcome::Updated(to_ref(&saved))
        } else {
            UpsertOutcome::Created(to_ref(&saved))
        };

        info!(
            tipo = kind.code(),
            numero = number,
            bytes = size,
            created = outcome.is_created(),
            "attachment stored"
        );
        Ok(outcome)
    }

    async fn numbers_with_attachment(
        &self,
        kind: DocumentKind,
        numbers: &[i64],
    ) -> Result<HashSet<i64>, AttachmentError> {
        if numbers.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i64> = documentos_pdf::Entity::find()
            .select_only()
            .column(documentos_pdf::Column::Numero)
            .filter(documentos_pdf::Column::Tipo.eq(kind.code()))
            .filter(documentos_pdf::Column::Numero.is_in(numbers.iter().copied()))
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .map_err(|e| AttachmentError::repository(e.to_string()))?;

        Ok(found.into_iter().collect())
    }
}

/// Single-statement insert that overwrites the blob on a (`tipo`, `numero`) clash.
fn upsert_statement(
    kind: DocumentKind,
    number: i64,
    content: Vec<u8>,
) -> Insert<documentos_pdf::ActiveModel> {
    documentos_pdf::Entity::insert(documentos_pdf::ActiveModel {
        tipo: Set(kind.code()),
        numero: Set(number),
        pdf: Set(content),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::columns([documentos_pdf::Column::Tipo, documentos_pdf::Column::Numero])
            .update_column(documentos_pdf::Column::Pdf)
            .to_owned(),
    )
}

fn to_ref(model: &documentos_pdf::Model) -> AttachmentRef {
    AttachmentRef {
        id: model.id,
        tipo: model.tipo,
        numero: model.numero,
    }
}

/// Convert database model to domain model.
fn to_domain(model: documentos_pdf::Model) -> Result<Attachment, AttachmentError> {
    let kind = DocumentKind::from_code(model.tipo).ok_or_else(|| {
        AttachmentError::repository(format!(
            "documentos_pdf row {} has unknown tipo {}",
            model.id, model.tipo
        ))
    })?;

    Ok(Attachment {
        id: model.id,
        kind,
        number: model.numero,
        content: model.pdf,
    })
}
