//! Approval stage types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a legacy approval flag column (`SMALLINT`, 0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalFlag {
    /// Stage not signed off (`0`).
    Unset,
    /// Stage signed off (`1`).
    Set,
}

impl ApprovalFlag {
    /// Returns the column value.
    #[must_use]
    pub const fn as_column(self) -> i16 {
        match self {
            Self::Unset => 0,
            Self::Set => 1,
        }
    }

    /// Reads a column value. Only `1` counts as set.
    #[must_use]
    pub const fn from_column(value: i16) -> Self {
        if value == 1 { Self::Set } else { Self::Unset }
    }

    /// Returns true if the stage is signed off.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }

    /// Returns the status reported for this flag.
    #[must_use]
    pub const fn status(self) -> ApprovalStatus {
        match self {
            Self::Set => ApprovalStatus::Aprobado,
            Self::Unset => ApprovalStatus::Pendiente,
        }
    }
}

/// Status reported back to clients after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Stage signed off.
    Aprobado,
    /// Stage waiting for sign-off.
    Pendiente,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aprobado => "aprobado",
            Self::Pendiente => "pendiente",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete content of one approval stage: the flag and its audit triple.
///
/// Repositories write every field of a `StageState` in the same statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageState {
    /// Flag column.
    pub flag: ApprovalFlag,
    /// Approving user code, empty when unset.
    pub user: String,
    /// Approval date. Never null in the legacy schema.
    pub date: NaiveDate,
    /// Approval time as `HH:MM:SS`, empty when unset.
    pub time: String,
}
