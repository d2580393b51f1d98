use serde::{Deserialize, Serialize};

use super::defaults;

/// Window scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// How far ahead to search for merge windows, in hours.
    pub horizon_hours: i64,
    /// A window is kept only if its convergence score is strictly above this.
    pub threshold: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            horizon_hours: defaults::DEFAULT_HORIZON_HOURS,
            threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}
