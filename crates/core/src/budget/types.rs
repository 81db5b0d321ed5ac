//! Budget domain types.

use serde::Serialize;

use crate::approval::ApprovalFlag;

/// `pre_est` value of a cancelled budget.
pub const CANCELLED_STATUS_CODE: &str = "N";

/// Position of a budget in the two-stage workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetApprovalState {
    /// Not released yet (stage 1 unset, stage 2 unset).
    NotReleased,
    /// Released and waiting for management.
    Pending,
    /// Signed off by management.
    Approved,
    /// Signed off by management without having been released.
    ApprovedWithoutRelease,
}

impl BudgetApprovalState {
    /// Derives the workflow position from both stage flags.
    #[must_use]
    pub const fn from_flags(release: ApprovalFlag, management: ApprovalFlag) -> Self {
        match (release, management) {
            (ApprovalFlag::Unset, ApprovalFlag::Unset) => Self::NotReleased,
            (ApprovalFlag::Set, ApprovalFlag::Unset) => Self::Pending,
            (ApprovalFlag::Set, ApprovalFlag::Set) => Self::Approved,
            (ApprovalFlag::Unset, ApprovalFlag::Set) => Self::ApprovedWithoutRelease,
        }
    }

    /// Returns false when stage 2 is set without stage 1.
    #[must_use]
    pub const fn is_consistent(self) -> bool {
        !matches!(self, Self::ApprovedWithoutRelease)
    }
}
