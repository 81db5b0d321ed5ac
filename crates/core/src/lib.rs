//! Core business logic for the approvals API.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `approval` - Two-stage approval transitions and the audit clock
//! - `budget` - Budget (`cot013`) state predicates
//! - `purchase_order` - Purchase order (`adq004`) status and amounts
//! - `auth` - Legacy credential check
//! - `attachment` - PDF attachment store contract and service
//! - `document` - Document kinds and keys shared by the above

pub mod approval;
pub mod attachment;
pub mod auth;
pub mod budget;
pub mod document;
pub mod purchase_order;

pub use document::{DocumentKey, DocumentKind};
