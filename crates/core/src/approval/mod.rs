//! Two-stage approval management.
//!
//! Budgets and purchase orders encode each approval stage as a flag column
//! plus an audit triple (user, date, time). This module computes complete
//! stage states so callers always write the four columns together.
//!
//! # Modules
//!
//! - `types` - Stage flag and stage state
//! - `error` - Approval-specific error types
//! - `service` - Approve / unapprove transitions
//! - `clock` - Audit clock in the ERP's timezone

pub mod clock;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use clock::{AUDIT_TIME_FORMAT, AuditClock};
pub use error::ApprovalError;
pub use service::ApprovalService;
pub use types::{ApprovalFlag, ApprovalStatus, StageState};
