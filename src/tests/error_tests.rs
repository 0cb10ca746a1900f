//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::apo_ring::ApoRingError;
use crate::data_structures::nalu_queue::NaluQueueError;
use crate::data_structures::ohana_hash_map::OhanaHashMapError;
use crate::error::{ErrorContext, TriageError};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = TriageError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that container errors convert into the umbrella error.
#[test]
fn test_container_error_conversions() {
    let from_queue: TriageError = NaluQueueError::Empty.into();
    assert!(matches!(from_queue, TriageError::Line(_)));
    assert!(format!("{from_queue}").contains("empty"));

    let from_ring: TriageError = ApoRingError::Full.into();
    assert!(matches!(from_ring, TriageError::Lab(_)));
    assert!(format!("{from_ring}").contains("full"));

    let from_map: TriageError = OhanaHashMapError::KeyNotFound.into();
    assert!(matches!(from_map, TriageError::Registry(_)));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let triage_error = TriageError::Io(io_error);

    let error_string = format!("{triage_error}");
    assert!(error_string.contains("file not found"));
}

/// Test the patient-facing error messages.
#[test]
fn test_patient_error_messages() {
    let not_found = TriageError::PatientNotFound("0000000007".to_string());
    assert!(format!("{not_found}").contains("0000000007"));

    let duplicate = TriageError::DuplicateRegistration("0000000007".to_string());
    assert!(format!("{duplicate}").contains("already registered"));
}
