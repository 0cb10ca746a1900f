//! Error module for the Malama Triage simulation.
//!
//! This module provides the error handling framework for the entire
//! application, following Rust's idiomatic error handling patterns with
//! explicit error types, proper error propagation, and helpful context
//! information. Every container failure is local, synchronous and
//! recoverable; the calling layer decides whether to retry, report or
//! ignore.

use std::fmt::{Display, Formatter};
use std::sync::Arc;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::apo_ring::ApoRingError;
use crate::data_structures::koa_stack::KoaStackError;
use crate::data_structures::nalu_queue::NaluQueueError;
use crate::data_structures::ohana_hash_map::OhanaHashMapError;

pub mod config;

/// Result type alias used throughout the Malama Triage simulation.
pub type TriageResult<T> = Result<T, TriageError>;

/// Core error enum for the Malama Triage simulation.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by a waiting-line queue.
    #[error("Waiting line error: {0}")]
    Line(#[from] NaluQueueError),

    /// Errors raised by a history or audit stack.
    #[error("History error: {0}")]
    History(#[from] KoaStackError),

    /// Errors raised by the lab ring buffer.
    #[error("Lab buffer error: {0}")]
    Lab(#[from] ApoRingError),

    /// Errors raised by the patient registry map.
    #[error("Registry error: {0}")]
    Registry(#[from] OhanaHashMapError),

    /// No patient is registered under the given NHS number.
    #[error("No patient registered under NHS number {0}")]
    PatientNotFound(String),

    /// A patient with the given NHS number is already registered.
    #[error("Patient {0} is already registered")]
    DuplicateRegistration(String),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: TriageError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: TriageError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter instance.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    if ERROR_REPORTER.set(reporter).is_err() {
        tracing::warn!("Global error reporter was already set, ignoring replacement");
    }
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output when no reporter has been
/// configured.
///
/// # Arguments
///
/// * `context` - The error context to report
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
