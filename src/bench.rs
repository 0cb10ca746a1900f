//! Benchmarking support for the Malama Triage simulation.
//!
//! This module provides fixtures shared by the Criterion benchmarks in
//! `benches/`. It is only compiled with the `benchmarking` feature.

use crate::triage::{PatientFactory, PatientRecord};

/// Builds a deterministic roster of `count` records for benchmarking.
///
/// The factory seeds are fixed so every benchmark run sorts and hashes
/// the exact same data.
pub fn roster_fixture(count: usize) -> Vec<PatientRecord> {
    let mut factory = PatientFactory::new(12_345, 42);
    (0..count).map(|_| factory.create_patient()).collect()
}
