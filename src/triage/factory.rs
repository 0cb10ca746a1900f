// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Patient factory.
//!
//! One place assembles every patient record: the factory allocates the
//! unique NHS number, stamps the insertion sequence, draws a priority
//! from its own generator and fills in demographics. Centralising the
//! steps keeps the rest of the system on a single interface and makes
//! the whole intake reproducible from two seeds.

use crate::config::generator::GeneratorConfig;
use crate::triage::audit::{AuditEntry, AuditKind};
use crate::triage::generator::{Demographics, Lcg};
use crate::triage::record::PatientRecord;

/// Builds fully-formed immutable patient records.
///
/// The priority generator is seeded separately from the demographics
/// generator so priority draws never disturb the demographic sequence.
#[derive(Debug)]
pub struct PatientFactory {
    demographics: Demographics,

    /// LCG state reserved for priority assignment.
    priorities: Lcg,

    /// Sequential counter behind NHS number allocation.
    next_nhs: u64,

    /// Insertion sequence stamped on the next record.
    next_sequence: u64,
}

impl PatientFactory {
    /// Creates a factory from explicit seeds.
    pub fn new(demographic_seed: u64, priority_seed: u64) -> Self {
        Self {
            demographics: Demographics::new(demographic_seed),
            priorities: Lcg::new(priority_seed),
            next_nhs: 1,
            next_sequence: 1,
        }
    }

    /// Creates a factory from the generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.demographic_seed, config.priority_seed)
    }

    /// Builds the next patient record.
    ///
    /// Allocates a fresh NHS number and insertion sequence, draws a
    /// priority in 1..=5 and samples the demographic pools. The record
    /// is complete and immutable when it leaves here.
    pub fn create_patient(&mut self) -> PatientRecord {
        let nhs_number = self.allocate_nhs_number();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        // Priorities run 1 (most urgent) to 5 (routine).
        let priority = (self.priorities.next_below(5) + 1) as u8;

        let record = PatientRecord::new(
            nhs_number,
            sequence,
            priority,
            self.demographics.first_name().to_string(),
            self.demographics.last_name().to_string(),
            self.demographics.date_of_birth().to_string(),
            self.demographics.blood_type().to_string(),
        );

        tracing::debug!(
            nhs_number = record.nhs_number(),
            priority = record.priority(),
            sequence = record.sequence(),
            "Patient record created"
        );

        record
    }

    /// Draws the intake observations for a freshly created patient.
    ///
    /// Mirrors an initial clinical assessment: two ailments and one
    /// symptom, returned as audit entries for the chart history.
    pub fn initial_observations(&mut self) -> Vec<AuditEntry> {
        vec![
            AuditEntry::new(
                AuditKind::Diagnosis,
                format!("Diagnosed with: {}", self.demographics.ailment()),
            ),
            AuditEntry::new(
                AuditKind::Diagnosis,
                format!("Diagnosed with: {}", self.demographics.ailment()),
            ),
            AuditEntry::new(
                AuditKind::Symptom,
                format!("Showing symptom: {}", self.demographics.symptom()),
            ),
        ]
    }

    /// Draws a medication for a pharmacy visit.
    pub fn dispense_medication(&mut self) -> AuditEntry {
        AuditEntry::new(
            AuditKind::StatusChange,
            format!("Dispensed: {}", self.demographics.medication()),
        )
    }

    fn allocate_nhs_number(&mut self) -> String {
        let number = self.next_nhs;
        self.next_nhs += 1;
        // Zero-padded to the ten digits of a real NHS number.
        format!("{number:010}")
    }
}
