//! Approval stage transitions.
//!
//! Both transitions produce the full [`StageState`] to persist. Neither looks
//! at the previous state: approving an approved stage re-stamps it and
//! unapproving a pending stage rewrites the cleared values.

use chrono::{NaiveDate, NaiveDateTime};

use aprobaciones_shared::auth::MAX_USER_CODE_LEN;

use crate::approval::clock::AUDIT_TIME_FORMAT;
use crate::approval::error::ApprovalError;
use crate::approval::types::{ApprovalFlag, StageState};

/// Stateless service computing approval stage transitions.
pub struct ApprovalService;

impl ApprovalService {
    /// Sign off a stage.
    ///
    /// # Arguments
    /// * `actor` - Code of the approving user
    /// * `now` - Local time of the approval
    ///
    /// # Returns
    /// * `Ok(StageState)` with flag set and the audit triple stamped
    /// * `Err(ApprovalError::InvalidActor)` if the code is blank or too long
    pub fn approve(actor: &str, now: NaiveDateTime) -> Result<StageState, ApprovalError> {
        let actor = actor.trim_end();
        if actor.is_empty() || actor.chars().count() > MAX_USER_CODE_LEN {
            return Err(ApprovalError::InvalidActor(actor.to_string()));
        }

        Ok(StageState {
            flag: ApprovalFlag::Set,
            user: actor.to_string(),
            date: now.date(),
            time: now.format(AUDIT_TIME_FORMAT).to_string(),
        })
    }

    /// Revert a stage to pending.
    ///
    /// The date columns are `NOT NULL`, so the cleared state carries
    /// `fallback_date` (the document's own date) instead of a null.
    #[must_use]
    pub fn unapprove(fallback_date: NaiveDate) -> StageState {
        StageState {
            flag: ApprovalFlag::Unset,
            user: String::new(),
            date: fallback_date,
            time: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_approve_stamps_audit_triple() {
        let state = ApprovalService::approve("JPEREZ", at(14, 3, 9)).unwrap();

        assert_eq!(state.flag, ApprovalFlag::Set);
        assert_eq!(state.user, "JPEREZ");
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2025, 12, 3).unwrap());
        assert_eq!(state.time, "14:03:09");
    }

    #[test]
    fn test_approve_trims_char_padding() {
        let state = ApprovalService::approve("ADMIN     ", at(8, 0, 0)).unwrap();
        assert_eq!(state.user, "ADMIN");
    }

    #[test]
    fn test_approve_rejects_blank_actor() {
        assert!(matches!(
            ApprovalService::approve("", at(8, 0, 0)),
            Err(ApprovalError::InvalidActor(_))
        ));
        assert!(matches!(
            ApprovalService::approve("   ", at(8, 0, 0)),
            Err(ApprovalError::InvalidActor(_))
        ));
    }

    #[test]
    fn test_approve_rejects_actor_longer_than_column() {
        assert!(matches!(
            ApprovalService::approve("ABCDEFGHIJK", at(8, 0, 0)),
            Err(ApprovalError::InvalidActor(_))
        ));
    }

    #[test]
    fn test_unapprove_uses_fallback_date() {
        let doc_date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let state = ApprovalService::unapprove(doc_date);

        assert_eq!(state.flag, ApprovalFlag::Unset);
        assert_eq!(state.date, doc_date);
        assert!(state.user.is_empty());
        assert!(state.time.is_empty());
    }
}
