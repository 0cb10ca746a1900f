//! Tests for the triage desk composition.
//!
//! Desk-level flows that cross several containers at once, plus the
//! audit trail's unwind-and-restore property.

use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::tests::test_utils::record;
use crate::triage::audit::{AuditEntry, AuditKind, AuditLog};
use crate::triage::desk::TriageDesk;
use proptest::prelude::*;

/// Registry growth: registering far more patients than the initial
/// bucket count must lose nobody.
#[test]
fn test_registry_growth_under_bulk_registration() {
    let mut config = TriageConfig::default();
    config.registry.initial_bucket_count = 2;
    let mut desk = TriageDesk::from_config(&config).unwrap();

    for seq in 1..=200u64 {
        desk.register(record((seq % 5) as u8 + 1, seq)).unwrap();
    }

    assert_eq!(desk.registered_count(), 200);
    for seq in 1..=200u64 {
        let nhs = format!("{seq:010}");
        assert_eq!(desk.patient(&nhs).unwrap().sequence(), seq);
    }
}

/// Status queries on unknown patients surface the NotFound taxonomy.
#[test]
fn test_unknown_patient_errors() {
    let mut desk = TriageDesk::new().unwrap();

    assert!(matches!(
        desk.current_status("0000000404"),
        Err(TriageError::PatientNotFound(_))
    ));
    assert!(matches!(
        desk.join_triage_line("0000000404"),
        Err(TriageError::PatientNotFound(_))
    ));
    assert!(matches!(
        desk.send_to_lab("0000000404"),
        Err(TriageError::PatientNotFound(_))
    ));
    assert!(matches!(
        desk.discharge("0000000404"),
        Err(TriageError::PatientNotFound(_))
    ));
}

/// A patient discharged while queued surfaces as NotFound when called.
#[test]
fn test_stale_line_entry_after_discharge() {
    let mut desk = TriageDesk::new().unwrap();
    desk.register(record(2, 1)).unwrap();
    desk.join_triage_line("0000000001").unwrap();
    desk.discharge("0000000001").unwrap();

    assert!(matches!(
        desk.call_next_from_triage(),
        Err(TriageError::PatientNotFound(_))
    ));
}

/// Sorting an empty roster is a no-op, and most_urgent never panics on
/// over-long prefixes.
#[test]
fn test_roster_edge_cases() {
    let mut desk = TriageDesk::new().unwrap();

    assert!(desk.sort_roster().is_empty());
    assert!(desk.most_urgent(10).is_empty());

    desk.register(record(3, 1)).unwrap();
    desk.sort_roster();
    assert_eq!(desk.most_urgent(10).len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Unwind-and-restore round trip: for any non-empty trail, a
    /// non-clearing review leaves pop order identical to the original.
    #[test]
    fn proptest_audit_review_round_trip(
        messages in prop::collection::vec("[a-z]{1,12}", 1..32),
    ) {
        let mut log = AuditLog::new();
        for message in &messages {
            log.record(AuditEntry::new(AuditKind::StatusChange, message.clone()));
        }

        let first = log.review(false);
        prop_assert_eq!(log.len(), messages.len());

        // A destructive unwind after the restore observes the same order.
        let second = log.review(true);
        prop_assert_eq!(first, second);
        prop_assert!(log.is_empty());
    }
}
