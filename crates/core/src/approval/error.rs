//! Approval error types.

use thiserror::Error;

use aprobaciones_shared::AppError;

use crate::document::{DocumentKey, DocumentKind};

/// Errors that can occur while toggling an approval stage.
#[derive(Debug, Error)]
pub enum ApprovalError {
    /// No row with the given key.
    #[error("{kind} {key} no existe")]
    NotFound {
        /// Document kind.
        kind: DocumentKind,
        /// Key that was looked up.
        key: DocumentKey,
    },

    /// Actor code is empty or does not fit the audit column.
    #[error("invalid approving user '{0}' (1 to 10 characters)")]
    InvalidActor(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl From<ApprovalError> for AppError {
    fn from(err: ApprovalError) -> Self {
        match err {
            ApprovalError::NotFound { .. } => Self::NotFound(err.to_string()),
            ApprovalError::InvalidActor(_) => Self::Validation(err.to_string()),
            ApprovalError::Database(msg) => Self::Database(msg),
        }
    }
}
