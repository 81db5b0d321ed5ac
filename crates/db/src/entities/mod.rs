//! `SeaORM` entities.
//!
//! Legacy tables keep their original column names through `column_name`;
//! only the columns this service reads or writes are mapped.

// Derive output (`Column`, `ActiveModel`, `Relation`) has no docs to carry.
#![allow(missing_docs)]

pub mod budgets;
pub mod documentos_pdf;
pub mod purchase_orders;
pub mod suppliers;
pub mod users;
