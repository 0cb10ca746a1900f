// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Append-only audit logging for the triage desk.
//!
//! Both the per-chart history and the administrator audit trail are
//! stacks of tagged entries. Nothing in the simulation ever edits an
//! entry after it is written; a change of state is always a new entry.
//! The administrator log additionally supports a non-destructive review
//! that unwinds the whole stack and then restores it exactly.

use std::fmt;

use serde::Serialize;

use crate::data_structures::koa_stack::KoaStack;

/// Category tag for an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditKind {
    /// A record was created and registered.
    Created,
    /// An ailment was recorded at intake.
    Diagnosis,
    /// A symptom was recorded at intake.
    Symptom,
    /// A free-form status change.
    StatusChange,
    /// A patient moved between lines or into the lab.
    Moved,
    /// A patient left the system.
    Discharged,
}

impl fmt::Display for AuditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuditKind::Created => "created",
            AuditKind::Diagnosis => "diagnosis",
            AuditKind::Symptom => "symptom",
            AuditKind::StatusChange => "status",
            AuditKind::Moved => "moved",
            AuditKind::Discharged => "discharged",
        };
        f.write_str(label)
    }
}

/// A single immutable audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    kind: AuditKind,
    message: String,
}

impl AuditEntry {
    /// Creates a new entry with the given tag and message.
    pub fn new<S: Into<String>>(kind: AuditKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the entry's category tag.
    pub fn kind(&self) -> AuditKind {
        self.kind
    }

    /// Returns the entry's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// The administrator audit trail.
///
/// A thin wrapper over [`KoaStack`] so the desk can hand out review and
/// clear operations without exposing raw stack mutation. The log is
/// owned by the desk and passed around explicitly; there is no hidden
/// global trail.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: KoaStack<AuditEntry>,
}

impl AuditLog {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self {
            entries: KoaStack::new(),
        }
    }

    /// Appends an entry to the trail.
    pub fn record(&mut self, entry: AuditEntry) {
        tracing::debug!(kind = %entry.kind(), message = entry.message(), "Audit entry recorded");
        self.entries.push(entry);
    }

    /// Returns the most recent entry, if any.
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.peek().ok()
    }

    /// Returns the number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards every entry in the trail.
    pub fn clear(&mut self) {
        while self.entries.pop().is_ok() {}
    }

    /// Unwinds the trail, newest first, optionally restoring it.
    ///
    /// Every entry is popped and collected in pop order. With `clear`
    /// set the log ends empty. Otherwise the collected entries are
    /// pushed back in reverse of pop order (first popped is pushed
    /// last), which restores the original top-to-bottom order exactly.
    pub fn review(&mut self, clear: bool) -> Vec<AuditEntry> {
        let mut unwound = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.entries.pop() {
            unwound.push(entry);
        }

        if !clear {
            for entry in unwound.iter().rev() {
                self.entries.push(entry.clone());
            }
        }

        unwound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> AuditEntry {
        AuditEntry::new(AuditKind::StatusChange, message)
    }

    #[test]
    fn test_latest_tracks_most_recent_entry() {
        let mut log = AuditLog::new();
        assert!(log.latest().is_none());

        log.record(entry("first"));
        log.record(entry("second"));

        assert_eq!(log.latest().unwrap().message(), "second");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_review_returns_newest_first() {
        let mut log = AuditLog::new();
        log.record(entry("first"));
        log.record(entry("second"));
        log.record(entry("third"));

        let unwound = log.review(false);
        let messages: Vec<&str> = unwound.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_review_without_clear_restores_order() {
        let mut log = AuditLog::new();
        for i in 0..5 {
            log.record(entry(&format!("event {i}")));
        }

        let before = log.review(false);
        assert_eq!(log.len(), 5);

        // A second unwind observes the identical order.
        let after = log.review(false);
        assert_eq!(before, after);
        assert_eq!(log.latest().unwrap().message(), "event 4");
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut log = AuditLog::new();
        for i in 0..3 {
            log.record(entry(&format!("event {i}")));
        }

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.review(false), Vec::new());
    }

    #[test]
    fn test_review_with_clear_empties_the_trail() {
        let mut log = AuditLog::new();
        log.record(entry("only"));

        let unwound = log.review(true);
        assert_eq!(unwound.len(), 1);
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}
