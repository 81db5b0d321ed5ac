//! PDF attachments keyed by document kind and number.
//!
//! The store lives outside the legacy ERP. This module defines its contract
//! ([`AttachmentStore`], implemented by the db crate) and the rules applied
//! before and after touching it.

mod error;
mod service;
mod types;

pub use error::AttachmentError;
pub use service::{AttachmentService, AttachmentStore, document_kind};
pub use types::{Attachment, AttachmentRef, UpsertOutcome};
