//! Decaying wait between improvement cycles.
//!
//! `wait(n) = max(floor, base / sqrt(n))` for cycle `n >= 1`. The loop starts
//! slow and tightens as the learning ledger fills, never below the floor.

use std::time::Duration;

use confluence_core::config::{defaults, ImprovementConfig};
use confluence_core::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayingInterval {
    base: Duration,
    floor: Duration,
}

impl DecayingInterval {
    /// A floor above the base is lowered to the base.
    pub fn new(base: Duration, floor: Duration) -> Self {
        Self {
            base,
            floor: floor.min(base),
        }
    }

    /// Fails when either interval is negative, NaN or out of range.
    pub fn from_config(config: &ImprovementConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.base_interval()?, config.floor_interval()?))
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    /// Wait after completing cycle `cycle`. Cycle 0 is treated as cycle 1.
    pub fn wait_for_cycle(&self, cycle: u64) -> Duration {
        let n = cycle.max(1) as f64;
        let decayed = self.base.as_secs_f64() / n.sqrt();
        Duration::from_secs_f64(decayed).max(self.floor)
    }
}

impl Default for DecayingInterval {
    fn default() -> Self {
        Self::new(
            Duration::from_secs_f64(defaults::DEFAULT_BASE_INTERVAL_SECS),
            Duration::from_secs_f64(defaults::DEFAULT_FLOOR_INTERVAL_SECS),
        )
    }
}
