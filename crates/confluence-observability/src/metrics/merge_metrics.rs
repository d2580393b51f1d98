use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use confluence_core::models::{AbortReason, IntegrationLevel, MergeResult};

/// Aggregated merge outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeMetricsCollector {
    performance_gains: Vec<f64>,
    mean_compatibilities: Vec<f64>,
    intensities: Vec<f64>,
    /// Completed merges per integration level.
    pub by_level: BTreeMap<String, u64>,
    pub completed: u64,
    pub aborted_no_window: u64,
    pub aborted_cancelled: u64,
}

impl MergeMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed merge.
    pub fn record(&mut self, result: &MergeResult) {
        self.performance_gains.push(result.performance_gain);
        self.mean_compatibilities.push(result.fused.mean_compatibility);
        self.intensities.push(result.intensity);
        *self
            .by_level
            .entry(result.fused.integration_level.as_str().to_string())
            .or_default() += 1;
        self.completed += 1;
    }

    pub fn record_abort(&mut self, reason: AbortReason) {
        match reason {
            AbortReason::NoViableWindow => self.aborted_no_window += 1,
            AbortReason::Cancelled => self.aborted_cancelled += 1,
        }
    }

    pub fn total_attempts(&self) -> u64 {
        self.completed + self.aborted_no_window + self.aborted_cancelled
    }

    /// Share of attempts that ended in an abort.
    pub fn abort_rate(&self) -> f64 {
        let total = self.total_attempts();
        if total == 0 {
            return 0.0;
        }
        (self.aborted_no_window + self.aborted_cancelled) as f64 / total as f64
    }

    pub fn avg_performance_gain(&self) -> f64 {
        super::mean(&self.performance_gains)
    }

    pub fn avg_mean_compatibility(&self) -> f64 {
        super::mean(&self.mean_compatibilities)
    }

    pub fn avg_intensity(&self) -> f64 {
        super::mean(&self.intensities)
    }

    pub fn count_at_level(&self, level: IntegrationLevel) -> u64 {
        self.by_level.get(level.as_str()).copied().unwrap_or(0)
    }
}
