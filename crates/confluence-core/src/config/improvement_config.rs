use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Improvement loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementConfig {
    /// Wait after the first cycle, in seconds.
    pub base_interval_secs: f64,
    /// The wait never drops below this, in seconds.
    pub floor_interval_secs: f64,
    /// Opportunities retained per cycle after ranking.
    pub top_k: usize,
    /// Completed cycles kept in the in-memory history ring.
    pub history_capacity: usize,
}

impl ImprovementConfig {
    /// Fails on a negative, NaN or unrepresentable interval.
    pub fn base_interval(&self) -> Result<Duration, ConfigError> {
        interval("improvement.base_interval_secs", self.base_interval_secs)
    }

    /// Fails on a negative, NaN or unrepresentable interval.
    pub fn floor_interval(&self) -> Result<Duration, ConfigError> {
        interval("improvement.floor_interval_secs", self.floor_interval_secs)
    }

    /// Both intervals convert, `0 < floor <= base`, and the sizes are nonzero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floor = self.floor_interval()?;
        let base = self.base_interval()?;
        if floor.is_zero() {
            return Err(invalid(
                "improvement.floor_interval_secs",
                "must be greater than 0",
            ));
        }
        if base < floor {
            return Err(invalid(
                "improvement.base_interval_secs",
                "must be at least improvement.floor_interval_secs",
            ));
        }
        if self.top_k == 0 {
            return Err(invalid("improvement.top_k", "must be greater than 0"));
        }
        if self.history_capacity == 0 {
            return Err(invalid(
                "improvement.history_capacity",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn interval(field: &str, secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|e| invalid(field, &e.to_string()))
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            base_interval_secs: defaults::DEFAULT_BASE_INTERVAL_SECS,
            floor_interval_secs: defaults::DEFAULT_FLOOR_INTERVAL_SECS,
            top_k: defaults::DEFAULT_TOP_K,
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}
