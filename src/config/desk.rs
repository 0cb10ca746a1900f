//! Triage desk configuration module.
//!
//! This module defines configuration related to the triage desk itself:
//! its display name and how many patients the most-urgent summary shows.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Triage desk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Name of the desk (used in logs and exports)
    pub name: String,

    /// Number of patients shown by the most-urgent summary
    pub urgent_display_count: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            name: "malama-triage".to_string(),
            urgent_display_count: 5,
        }
    }
}

impl Validate for DeskConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Desk name cannot be empty".to_string(),
            ));
        }

        if self.urgent_display_count == 0 {
            return Err(ConfigError::ValidationError(
                "urgent_display_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
