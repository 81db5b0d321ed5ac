//! Attachment service implementation.

use std::collections::HashSet;
use std::sync::Arc;

use super::error::AttachmentError;
use super::types::{Attachment, UpsertOutcome};
use crate::document::DocumentKind;

/// Persistence contract for the attachment store.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait AttachmentStore: Send + Sync {
    /// Find the attachment for a document.
    fn find(
        &self,
        kind: DocumentKind,
        number: i64,
    ) -> impl std::future::Future<Output = Result<Option<Attachment>, AttachmentError>> + Send;

    /// Replace the blob of the existing row or insert a new one, atomically.
    fn upsert(
        &self,
        kind: DocumentKind,
        number: i64,
        content: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<UpsertOutcome, AttachmentError>> + Send;

    /// Return which of `numbers` have an attachment of `kind`.
    fn numbers_with_attachment(
        &self,
        kind: DocumentKind,
        numbers: &[i64],
    ) -> impl std::future::Future<Output = Result<HashSet<i64>, AttachmentError>> + Send;
}

/// Resolve a `tipo` code.
///
/// # Errors
///
/// Returns `AttachmentError::UnknownKind` for anything but 1 or 2.
pub fn document_kind(code: i16) -> Result<DocumentKind, AttachmentError> {
    DocumentKind::from_code(code).ok_or(AttachmentError::UnknownKind(code))
}

/// Attachment service.
pub struct AttachmentService<S: AttachmentStore> {
    store: Arc<S>,
}

impl<S: AttachmentStore> Clone for AttachmentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: AttachmentStore> AttachmentService<S> {
    /// Create a new attachment service.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the PDF of a document.
    ///
    /// A row holding zero bytes counts as missing.
    pub async fn fetch(&self, kind: DocumentKind, number: i64) -> Result<Vec<u8>, AttachmentError> {
        match self.store.find(kind, number).await? {
            Some(attachment) if !attachment.content.is_empty() => Ok(attachment.content),
            _ => Err(AttachmentError::NotFound { kind, number }),
        }
    }

    /// Store the PDF of a document, overwriting any previous one.
    pub async fn upsert(
        &self,
        kind: DocumentKind,
        number: i64,
        content: Vec<u8>,
    ) -> Result<UpsertOutcome, AttachmentError> {
        if content.is_empty() {
            return Err(AttachmentError::EmptyContent);
        }
        self.store.upsert(kind, number, content).await
    }

    /// Report, for every number in `numbers`, whether it has an attachment.
    ///
    /// The result is in input order. One store round trip per call.
    pub async fn attachment_flags(
        &self,
        kind: DocumentKind,
        numbers: &[i64],
    ) -> Result<Vec<bool>, AttachmentError> {
        if numbers.is_empty() {
            return Ok(Vec::new());
        }

        let mut unique: Vec<i64> = numbers.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let present = self.store.numbers_with_attachment(kind, &unique).await?;
        Ok(numbers.iter().map(|n| present.contains(n)).collect())
    }
}
