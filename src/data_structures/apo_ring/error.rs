// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Apo Ring buffer.

/// Error types for Apo Ring operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApoRingError {
    /// Ring is at capacity and cannot accept more elements.
    #[error("Ring buffer is full")]
    Full,

    /// Ring has no elements to dequeue or peek at.
    #[error("Ring buffer is empty")]
    Empty,

    /// Ring was constructed with an unusable capacity.
    #[error("Ring buffer capacity must be a positive integer")]
    Configuration,
}

/// Result type for Apo Ring operations.
pub type ApoRingResult<T> = Result<T, ApoRingError>;
