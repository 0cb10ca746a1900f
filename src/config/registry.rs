//! Patient registry configuration module.
//!
//! The registry is the hand-built hash map keyed by NHS number. Its
//! tunables mirror the map's own configuration: the starting bucket
//! count and the load factor at which the table doubles.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::ohana_hash_map::OhanaHashMapConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Patient registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Number of buckets the registry starts with
    pub initial_bucket_count: usize,

    /// Load factor above which the registry doubles its bucket array
    pub max_load_factor: f64,
}

impl RegistryConfig {
    /// Converts into the map's own configuration type.
    pub fn to_map_config(&self) -> OhanaHashMapConfig {
        OhanaHashMapConfig::new()
            .with_initial_bucket_count(self.initial_bucket_count)
            .with_max_load_factor(self.max_load_factor)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: 16,
            max_load_factor: 0.7,
        }
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_bucket_count == 0 {
            return Err(ConfigError::ValidationError(
                "initial_bucket_count must be greater than 0".to_string(),
            ));
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "max_load_factor must lie strictly between 0 and 1, got {}",
                self.max_load_factor
            )));
        }

        Ok(())
    }
}
