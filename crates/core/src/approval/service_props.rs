//! Property-based tests for ApprovalService.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use crate::approval::service::ApprovalService;
use crate::approval::types::ApprovalFlag;

/// Strategy for legacy user codes (1 to 10 characters, no trailing blanks).
fn arb_actor() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9_]{0,9}".prop_map(String::from)
}

/// Strategy for dates the ERP can hold.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for local timestamps.
fn arb_instant() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(d, h, m, s)| d.and_hms_opt(h, m, s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Approving sets the flag and stamps the whole audit triple.
    #[test]
    fn prop_approve_stamps_all_columns(actor in arb_actor(), now in arb_instant()) {
        let state = ApprovalService::approve(&actor, now).unwrap();

        prop_assert_eq!(state.flag, ApprovalFlag::Set);
        prop_assert_eq!(&state.user, &actor);
        prop_assert_eq!(state.date, now.date());
        prop_assert_eq!(state.time.len(), 8);
        prop_assert_eq!(
            NaiveDateTime::new(state.date, chrono::NaiveTime::parse_from_str(&state.time, "%H:%M:%S").unwrap()),
            now
        );
    }

    /// Approve followed by unapprove returns the flag to 0 and clears user/time.
    #[test]
    fn prop_approve_then_unapprove_clears(
        actor in arb_actor(),
        now in arb_instant(),
        doc_date in arb_date(),
    ) {
        let approved = ApprovalService::approve(&actor, now).unwrap();
        prop_assert!(approved.flag.is_set());

        let reverted = ApprovalService::unapprove(doc_date);
        prop_assert_eq!(reverted.flag.as_column(), 0);
        prop_assert!(reverted.user.is_empty());
        prop_assert!(reverted.time.is_empty());
        prop_assert_eq!(reverted.date, doc_date);
    }

    /// Unapprove is idempotent.
    #[test]
    fn prop_unapprove_idempotent(doc_date in arb_date()) {
        prop_assert_eq!(
            ApprovalService::unapprove(doc_date),
            ApprovalService::unapprove(doc_date)
        );
    }

    /// Codes longer than the legacy column are never accepted.
    #[test]
    fn prop_long_actor_rejected(actor in "[A-Z]{11,30}", now in arb_instant()) {
        prop_assert!(ApprovalService::approve(&actor, now).is_err());
    }
}
