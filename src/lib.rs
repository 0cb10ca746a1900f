//! Malama Triage Library
//!
//! This library contains the core components of the Malama Triage
//! simulation: the hand-built containers (linked queue, linked stack,
//! ring buffer, chained hash map), the stable merge sort, and the
//! triage domain that composes them into a hospital desk. The library
//! is designed to be used by the binary crate, but can also be used as
//! a dependency by other projects.
//!
//! # Architecture
//!
//! The simulation is designed with the following principles in mind:
//! - Containers built from first principles with explicit costs
//! - Single-threaded, synchronous operation throughout
//! - Immutable records; state changes are append-only audit entries
//! - Comprehensive error handling and propagation
//! - Deterministic patient generation for reproducible runs

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod sorting;
pub mod triage;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Malama Triage simulation.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::TriageResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
