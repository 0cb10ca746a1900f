//! Blood laboratory configuration module.
//!
//! The lab is modeled as a fixed-capacity ring buffer; its only tunable
//! is how many samples fit at once. The capacity is fixed for the life
//! of the simulation, so it must be valid before the buffer is built.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Blood laboratory buffer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Number of samples the lab can hold at once
    pub capacity: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self { capacity: 8 }
    }
}

impl Validate for LabConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "Lab capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
