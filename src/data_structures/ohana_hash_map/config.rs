// Copyright (c) 2025 Malama Triage Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Ohana Hash Map.

use crate::data_structures::ohana_hash_map::error::{OhanaHashMapError, OhanaHashMapResult};

/// Configuration for the Ohana Hash Map.
#[derive(Debug, Clone)]
pub struct OhanaHashMapConfig {
    /// Number of buckets the map starts with. Must be positive; the
    /// array doubles whenever the load factor crosses the threshold.
    pub initial_bucket_count: usize,

    /// Maximum ratio of entries to buckets before a resize is
    /// triggered. Must lie strictly between 0 and 1.
    pub max_load_factor: f64,
}

impl OhanaHashMapConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of buckets.
    ///
    /// # Arguments
    ///
    /// * `initial_bucket_count` - The number of buckets to allocate up
    ///   front.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_bucket_count(mut self, initial_bucket_count: usize) -> Self {
        self.initial_bucket_count = initial_bucket_count;
        self
    }

    /// Sets the maximum load factor before triggering a resize.
    ///
    /// # Arguments
    ///
    /// * `max_load_factor` - The maximum load factor (exclusive 0 to 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OhanaHashMapError::Configuration`] when the bucket
    /// count is zero or the load-factor threshold falls outside
    /// `(0, 1)`.
    pub fn validate(&self) -> OhanaHashMapResult<()> {
        if self.initial_bucket_count == 0 {
            return Err(OhanaHashMapError::Configuration(
                "initial_bucket_count must be a positive integer".to_string(),
            ));
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(OhanaHashMapError::Configuration(format!(
                "max_load_factor must lie strictly between 0 and 1, got {}",
                self.max_load_factor
            )));
        }

        Ok(())
    }
}

impl Default for OhanaHashMapConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: 16, // small table; doubling reaches any size quickly
            max_load_factor: 0.7,     // standard threshold for separate chaining
        }
    }
}
