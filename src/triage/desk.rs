// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The triage desk: composition root of the simulation.
//!
//! One desk owns every structure in play: the patient registry (hash
//! map keyed by NHS number), the master roster (kept ordered by the
//! stable merge sort), the triage and pharmacy waiting lines (linked
//! queues), the blood lab buffer (fixed-capacity ring) and the
//! administrator audit trail (linked stack). The waiting lines and the
//! lab hold NHS numbers, never records, so the registry remains the
//! single owner of every chart. All operations are synchronous and
//! sequential; a single caller drives the desk at a time.

use crate::config::TriageConfig;
use crate::data_structures::apo_ring::ApoRing;
use crate::data_structures::nalu_queue::NaluQueue;
use crate::data_structures::ohana_hash_map::OhanaHashMap;
use crate::error::{TriageError, TriageResult};
use crate::sorting::merge_sort;
use crate::triage::audit::{AuditEntry, AuditKind, AuditLog};
use crate::triage::record::{PatientChart, PatientRecord};

/// The owning context for a triage session.
#[derive(Debug)]
pub struct TriageDesk {
    /// Patient registry keyed by NHS number.
    registry: OhanaHashMap<String, PatientChart>,

    /// Master sequence; always the result of the most recent sort.
    roster: Vec<PatientRecord>,

    /// First-come, first-served line for initial assessment.
    triage_line: NaluQueue<String>,

    /// First-come, first-served line for medication pickup.
    pharmacy_line: NaluQueue<String>,

    /// Capacity-bounded blood laboratory buffer.
    lab: ApoRing<String>,

    /// Administrator audit trail.
    audit: AuditLog,
}

impl TriageDesk {
    /// Creates a desk with default configuration.
    pub fn new() -> TriageResult<Self> {
        Self::from_config(&TriageConfig::default())
    }

    /// Creates a desk from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates `Configuration` errors from the registry map or the
    /// lab ring when the configured capacities are unusable.
    pub fn from_config(config: &TriageConfig) -> TriageResult<Self> {
        let registry = OhanaHashMap::with_config(config.registry.to_map_config())?;
        let lab = ApoRing::new(config.lab.capacity)?;

        Ok(Self {
            registry,
            roster: Vec::new(),
            triage_line: NaluQueue::new(),
            pharmacy_line: NaluQueue::new(),
            lab,
            audit: AuditLog::new(),
        })
    }

    /// Registers a new patient.
    ///
    /// The record is stored in the registry under its NHS number, a
    /// chart is opened with a creation entry, and the record joins the
    /// roster. The roster is unordered until the next [`sort_roster`]
    /// call.
    ///
    /// [`sort_roster`]: TriageDesk::sort_roster
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::DuplicateRegistration`] when a patient
    /// with the same NHS number is already registered.
    pub fn register(&mut self, record: PatientRecord) -> TriageResult<()> {
        let nhs = record.nhs_number().to_string();
        if self.registry.contains_key(nhs.as_str()) {
            return Err(TriageError::DuplicateRegistration(nhs));
        }

        let mut chart = PatientChart::new(record.clone());
        chart.log_event(AuditEntry::new(
            AuditKind::Created,
            format!("Record created with priority {}", record.priority()),
        ));

        self.registry.put(nhs.clone(), chart);
        self.roster.push(record);
        self.audit.record(AuditEntry::new(
            AuditKind::Created,
            format!("Registered patient {nhs}"),
        ));

        tracing::info!(nhs_number = %nhs, "Patient registered");
        Ok(())
    }

    /// Looks up a patient's record.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn patient(&self, nhs: &str) -> TriageResult<&PatientRecord> {
        self.registry
            .get(nhs)
            .map(PatientChart::record)
            .ok_or_else(|| TriageError::PatientNotFound(nhs.to_string()))
    }

    /// Looks up a patient's chart, history included.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn chart(&self, nhs: &str) -> TriageResult<&PatientChart> {
        self.registry
            .get(nhs)
            .ok_or_else(|| TriageError::PatientNotFound(nhs.to_string()))
    }

    /// Appends a clinical event to a patient's history.
    ///
    /// The stored record is never modified; a status change is an
    /// append-only entry on the chart.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn record_status(&mut self, nhs: &str, entry: AuditEntry) -> TriageResult<()> {
        let chart = self.chart_mut(nhs)?;
        chart.log_event(entry);
        Ok(())
    }

    /// Returns a patient's most recent clinical event.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] for an unknown NHS
    /// number, or the history stack's `Empty` error for a chart with no
    /// entries.
    pub fn current_status(&self, nhs: &str) -> TriageResult<&AuditEntry> {
        Ok(self.chart(nhs)?.current_status()?)
    }

    /// Adds a patient to the back of the triage line.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn join_triage_line(&mut self, nhs: &str) -> TriageResult<()> {
        self.patient(nhs)?;
        self.triage_line.enqueue(nhs.to_string());
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Patient {nhs} joined the triage line"),
        ));
        Ok(())
    }

    /// Calls the next patient from the triage line.
    ///
    /// # Errors
    ///
    /// Propagates the line's `Empty` error when nobody is waiting, and
    /// returns [`TriageError::PatientNotFound`] when the called patient
    /// was discharged while queued.
    pub fn call_next_from_triage(&mut self) -> TriageResult<PatientRecord> {
        let nhs = self.triage_line.dequeue()?;
        let record = self.patient(&nhs)?.clone();
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Patient {nhs} called from the triage line"),
        ));
        Ok(record)
    }

    /// Adds a patient to the back of the pharmacy line.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn join_pharmacy_line(&mut self, nhs: &str) -> TriageResult<()> {
        self.patient(nhs)?;
        self.pharmacy_line.enqueue(nhs.to_string());
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Patient {nhs} joined the pharmacy line"),
        ));
        Ok(())
    }

    /// Calls the next patient from the pharmacy line.
    ///
    /// # Errors
    ///
    /// Propagates the line's `Empty` error when nobody is waiting, and
    /// returns [`TriageError::PatientNotFound`] when the called patient
    /// was discharged while queued.
    pub fn call_next_from_pharmacy(&mut self) -> TriageResult<PatientRecord> {
        let nhs = self.pharmacy_line.dequeue()?;
        let record = self.patient(&nhs)?.clone();
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Patient {nhs} called from the pharmacy line"),
        ));
        Ok(record)
    }

    /// Sends a patient's sample to the blood lab.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] for an unknown NHS
    /// number, or the ring's `Full` error when the lab is at capacity;
    /// a full lab leaves the desk unchanged.
    pub fn send_to_lab(&mut self, nhs: &str) -> TriageResult<()> {
        self.patient(nhs)?;
        self.lab.enqueue(nhs.to_string())?;

        let chart = self.chart_mut(nhs)?;
        chart.log_event(AuditEntry::new(AuditKind::Moved, "Sample sent to blood lab"));
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Sample for patient {nhs} entered the lab"),
        ));
        Ok(())
    }

    /// Collects the oldest processed sample from the blood lab.
    ///
    /// Returns the NHS number the sample belongs to. The chart is
    /// updated when the patient is still registered; a sample whose
    /// patient was discharged is still drained from the buffer.
    ///
    /// # Errors
    ///
    /// Propagates the ring's `Empty` error when no sample is waiting.
    pub fn collect_from_lab(&mut self) -> TriageResult<String> {
        let nhs = self.lab.dequeue()?;

        if let Some(chart) = self.registry.get_mut(nhs.as_str()) {
            chart.log_event(AuditEntry::new(
                AuditKind::StatusChange,
                "Blood results returned",
            ));
        }
        self.audit.record(AuditEntry::new(
            AuditKind::Moved,
            format!("Sample for patient {nhs} left the lab"),
        ));
        Ok(nhs)
    }

    /// Discharges a patient, removing them from registry and roster.
    ///
    /// The returned record is the final immutable state. Waiting-line
    /// entries for the patient become stale and surface as
    /// `PatientNotFound` when called.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::PatientNotFound`] when no patient is
    /// registered under the NHS number.
    pub fn discharge(&mut self, nhs: &str) -> TriageResult<PatientRecord> {
        let chart = self
            .registry
            .delete(nhs)
            .map_err(|_| TriageError::PatientNotFound(nhs.to_string()))?;

        self.roster.retain(|record| record.nhs_number() != nhs);
        self.audit.record(AuditEntry::new(
            AuditKind::Discharged,
            format!("Discharged patient {nhs}"),
        ));

        tracing::info!(nhs_number = %nhs, "Patient discharged");
        Ok(chart.record().clone())
    }

    /// Sorts the roster by the record ordering contract.
    ///
    /// Stable merge sort: most urgent priority first, arrival order
    /// preserved among equals. The sorted sequence replaces the roster
    /// and is what [`roster`] and [`most_urgent`] expose until the next
    /// mutation.
    ///
    /// [`roster`]: TriageDesk::roster
    /// [`most_urgent`]: TriageDesk::most_urgent
    pub fn sort_roster(&mut self) -> &[PatientRecord] {
        self.roster = merge_sort(&self.roster);
        tracing::info!(patients = self.roster.len(), "Roster sorted by urgency");
        &self.roster
    }

    /// Returns the roster as of the most recent sort call.
    pub fn roster(&self) -> &[PatientRecord] {
        &self.roster
    }

    /// Returns the `k` most urgent patients from the last sort.
    pub fn most_urgent(&self, k: usize) -> &[PatientRecord] {
        &self.roster[..k.min(self.roster.len())]
    }

    /// Returns the number of registered patients.
    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the number of patients waiting in the triage line.
    pub fn triage_line_len(&self) -> usize {
        self.triage_line.len()
    }

    /// Returns the number of patients waiting in the pharmacy line.
    pub fn pharmacy_line_len(&self) -> usize {
        self.pharmacy_line.len()
    }

    /// Returns the number of samples currently in the lab.
    pub fn lab_occupancy(&self) -> usize {
        self.lab.len()
    }

    /// Returns the administrator audit trail, read-only.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Unwinds the audit trail for review, newest first.
    ///
    /// With `clear` unset the trail is restored to its exact prior
    /// order; with `clear` set it ends empty.
    pub fn review_audit(&mut self, clear: bool) -> Vec<AuditEntry> {
        self.audit.review(clear)
    }

    fn chart_mut(&mut self, nhs: &str) -> TriageResult<&mut PatientChart> {
        self.registry
            .get_mut(nhs)
            .ok_or_else(|| TriageError::PatientNotFound(nhs.to_string()))
    }
}
