// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Immutable patient record and the triage ordering contract.
//!
//! A record is created once by the factory and never mutated. Every
//! later clinical event is an append to the chart's history stack, not
//! a field update, so the identity data a record was admitted with is
//! the identity data it is discharged with.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::data_structures::koa_stack::{KoaStack, KoaStackResult};
use crate::triage::audit::AuditEntry;

/// An immutable patient record.
///
/// Ordering and equality are defined solely by the pair
/// `(priority, sequence)`: lower priority numbers are more urgent, and
/// the insertion sequence, a counter assigned once at creation, breaks
/// ties in arrival order. No other field participates, so sorting the
/// roster never depends on names or identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct PatientRecord {
    /// Unique identifier; the registry hash key.
    nhs_number: String,

    /// Insertion sequence: monotonically increasing, assigned at
    /// creation, never changed afterwards.
    sequence: u64,

    /// Clinical urgency from 1 (most urgent) to 5 (routine).
    priority: u8,

    first_name: String,
    last_name: String,
    date_of_birth: String,
    blood_type: String,
}

impl PatientRecord {
    /// Creates a new record.
    ///
    /// The factory is the normal producer; it guarantees NHS numbers
    /// are unique and sequences strictly increasing.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nhs_number: String,
        sequence: u64,
        priority: u8,
        first_name: String,
        last_name: String,
        date_of_birth: String,
        blood_type: String,
    ) -> Self {
        Self {
            nhs_number,
            sequence,
            priority,
            first_name,
            last_name,
            date_of_birth,
            blood_type,
        }
    }

    /// Returns the patient's unique NHS number.
    pub fn nhs_number(&self) -> &str {
        &self.nhs_number
    }

    /// Returns the insertion sequence assigned at creation.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the clinical priority (1 is most urgent).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Returns the patient's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the patient's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the patient's date of birth.
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Returns the patient's blood type.
    pub fn blood_type(&self) -> &str {
        &self.blood_type
    }
}

impl PartialEq for PatientRecord {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for PatientRecord {}

impl PartialOrd for PatientRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PatientRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}, {} | priority {} | {}",
            self.nhs_number, self.last_name, self.first_name, self.priority, self.blood_type
        )
    }
}

/// A registry entry: the immutable record plus its owned history.
///
/// The history is a LIFO stack so the most recent clinical event is
/// always an O(1) peek away. Entries only accumulate; a status change
/// appends, it never rewrites.
#[derive(Debug)]
pub struct PatientChart {
    record: PatientRecord,
    history: KoaStack<AuditEntry>,
}

impl PatientChart {
    /// Creates a chart around a record with an empty history.
    pub fn new(record: PatientRecord) -> Self {
        Self {
            record,
            history: KoaStack::new(),
        }
    }

    /// Returns the immutable record.
    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    /// Appends a clinical event to the history.
    pub fn log_event(&mut self, entry: AuditEntry) {
        self.history.push(entry);
    }

    /// Returns the most recent clinical event.
    ///
    /// # Errors
    ///
    /// Returns the stack's `Empty` error when nothing has been logged.
    pub fn current_status(&self) -> KoaStackResult<&AuditEntry> {
        self.history.peek()
    }

    /// Returns the number of logged events.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
