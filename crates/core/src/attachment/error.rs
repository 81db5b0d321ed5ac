//! Attachment error types.

use thiserror::Error;

use aprobaciones_shared::AppError;

use crate::document::DocumentKind;

/// Attachment operation errors.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// No attachment, or an empty one, for the document.
    #[error("PDF no encontrado para {kind} {number}")]
    NotFound {
        /// Document kind.
        kind: DocumentKind,
        /// Document number.
        number: i64,
    },

    /// `tipo` is not a known document kind.
    #[error("tipo inválido: {0} (1 = presupuesto, 2 = orden de compra)")]
    UnknownKind(i16),

    /// Uploaded file has no bytes.
    #[error("el archivo PDF está vacío")]
    EmptyContent,

    /// Store operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl AttachmentError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<AttachmentError> for AppError {
    fn from(err: AttachmentError) -> Self {
        match err {
            AttachmentError::NotFound { .. } => Self::NotFound(err.to_string()),
            AttachmentError::UnknownKind(_) | AttachmentError::EmptyContent => {
                Self::Validation(err.to_string())
            }
            AttachmentError::Repository(msg) => Self::Database(msg),
        }
    }
}
