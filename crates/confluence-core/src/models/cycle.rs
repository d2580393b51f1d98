use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DroppedOpportunity, Improvement, Opportunity, PerformanceSnapshot, RejectedImprovement};

/// One completed iteration of the improvement loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementCycle {
    /// Monotonic, starts at 1.
    pub cycle_number: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub performance_snapshot: PerformanceSnapshot,
    /// Ranked opportunities retained for generation.
    pub opportunities: Vec<Opportunity>,
    /// Opportunities dropped before generation.
    pub dropped: Vec<DroppedOpportunity>,
    /// Candidates that passed validation and were deployed.
    pub applied_improvements: Vec<Improvement>,
    /// Candidates rejected by validation or deployment.
    pub rejected: Vec<RejectedImprovement>,
    /// Suspension before the next cycle.
    pub next_wait: Duration,
}

impl ImprovementCycle {
    pub fn applied_count(&self) -> usize {
        self.applied_improvements.len()
    }

    /// Share of generated candidates that were applied.
    pub fn acceptance_rate(&self) -> f64 {
        let generated = self.applied_improvements.len() + self.rejected.len();
        if generated == 0 {
            return 0.0;
        }
        self.applied_improvements.len() as f64 / generated as f64
    }
}
