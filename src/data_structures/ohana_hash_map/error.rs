// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ohana Hash Map.

/// Error types for Ohana Hash Map operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OhanaHashMapError {
    /// No entry with the requested key exists in the map.
    #[error("Key not found in the map")]
    KeyNotFound,

    /// Configuration error.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for Ohana Hash Map operations.
pub type OhanaHashMapResult<T> = Result<T, OhanaHashMapError>;
