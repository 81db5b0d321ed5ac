//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Largest page a client may request.
pub const MAX_LIMIT: u64 = 1000;

/// Page size when the client sends none.
pub const DEFAULT_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Rows to skip from the start of the ordered result.
    #[serde(default)]
    pub skip: u64,
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Rejects limits outside `1..=MAX_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the limit is zero or too large.
    pub fn validate(&self) -> Result<Self, AppError> {
        if self.limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "El límite máximo es {MAX_LIMIT} registros"
            )));
        }
        if self.limit == 0 {
            return Err(AppError::Validation(
                "El límite debe ser mayor a 0".to_string(),
            ));
        }
        Ok(*self)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.skip
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
