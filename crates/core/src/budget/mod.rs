//! Budget ("presupuesto") approval state.
//!
//! A budget is released at stage 1 (liberación) and signed off by management
//! at stage 2 (gerencia, `vbgg`). The API only toggles stage 2.

mod types;

pub use types::{BudgetApprovalState, CANCELLED_STATUS_CODE};
