//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod budget;
pub mod document_pdf;
pub mod purchase_order;
pub mod user;

pub use budget::{ApprovedBudgetFilter, BudgetIndicators, BudgetRepository};
pub use document_pdf::DocumentPdfRepository;
pub use purchase_order::{OrderIndicators, OrderWithSupplier, PurchaseOrderRepository};
pub use user::UserRepository;
