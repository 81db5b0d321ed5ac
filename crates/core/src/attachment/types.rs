//! Attachment types.

use serde::Serialize;

use crate::document::DocumentKind;

/// A stored PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Row id.
    pub id: i64,
    /// Document kind (`tipo`).
    pub kind: DocumentKind,
    /// Document number (`numero`).
    pub number: i64,
    /// PDF bytes.
    pub content: Vec<u8>,
}

/// Identity of a stored attachment, as returned by an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttachmentRef {
    /// Row id.
    pub id: i64,
    /// Document kind code.
    pub tipo: i16,
    /// Document number.
    pub numero: i64,
}

/// Whether an upsert created a row or overwrote one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new row was inserted.
    Created(AttachmentRef),
    /// The blob of an existing row was replaced.
    Updated(AttachmentRef),
}

impl UpsertOutcome {
    /// Returns the stored attachment identity.
    #[must_use]
    pub const fn attachment(&self) -> AttachmentRef {
        match self {
            Self::Created(r) | Self::Updated(r) => *r,
        }
    }

    /// Returns true if a new row was inserted.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
