use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use confluence_core::models::ImprovementCycle;

/// Aggregated improvement-loop throughput.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImprovementMetricsCollector {
    wait_secs: Vec<f64>,
    pub cycles: u64,
    pub probe_failures: u64,
    pub opportunities: u64,
    pub dropped: u64,
    pub applied: u64,
    pub rejected: u64,
    /// Applied improvements per opportunity kind.
    pub applied_by_kind: BTreeMap<String, u64>,
    pub last_cycle: Option<u64>,
}

impl ImprovementMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, cycle: &ImprovementCycle) {
        self.cycles += 1;
        self.opportunities += cycle.opportunities.len() as u64;
        self.dropped += cycle.dropped.len() as u64;
        self.applied += cycle.applied_improvements.len() as u64;
        self.rejected += cycle.rejected.len() as u64;
        for improvement in &cycle.applied_improvements {
            *self
                .applied_by_kind
                .entry(improvement.kind.as_str().to_string())
                .or_default() += 1;
        }
        self.wait_secs.push(cycle.next_wait.as_secs_f64());
        self.last_cycle = Some(cycle.cycle_number);
    }

    pub fn record_probe_failure(&mut self) {
        self.probe_failures += 1;
    }

    /// Applied over generated (applied + rejected), across all cycles.
    pub fn acceptance_rate(&self) -> f64 {
        let generated = self.applied + self.rejected;
        if generated == 0 {
            return 0.0;
        }
        self.applied as f64 / generated as f64
    }

    pub fn avg_applied_per_cycle(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.applied as f64 / self.cycles as f64
    }

    pub fn avg_wait_secs(&self) -> f64 {
        super::mean(&self.wait_secs)
    }
}
