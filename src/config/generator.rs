//! Patient generation configuration module.
//!
//! Seeds for the two linear congruential generators behind the patient
//! factory. Fixed seeds make every simulation run reproducible; change
//! either seed to get a different (but still deterministic) intake.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Patient generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed for the demographics generator (names, dates of birth, blood types)
    pub demographic_seed: u64,

    /// Seed for the priority generator (kept separate so priority draws
    /// do not disturb the demographic sequence)
    pub priority_seed: u64,

    /// Number of patients a simulation run creates
    pub intake_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            demographic_seed: 12_345,
            priority_seed: 42,
            intake_count: 25,
        }
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Any seed is usable; only the intake size needs a floor.
        if self.intake_count == 0 {
            return Err(ConfigError::ValidationError(
                "intake_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
