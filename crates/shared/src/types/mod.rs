//! Common query types used by the list endpoints.

pub mod date_range;
pub mod pagination;

pub use date_range::DateRange;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, PageRequest};
