use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

use super::{above, impact, OpportunityDetector};

const LATENCY_BUDGET_MS: f64 = 250.0;
const UTILIZATION_LIMIT: f64 = 0.80;

#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceDetector;

impl OpportunityDetector for PerformanceDetector {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::PerformanceOptimization
    }

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity> {
        let mut found = Vec::new();

        if let Some(p99) = above(snapshot, "latency_p99_ms", LATENCY_BUDGET_MS) {
            found.push(Opportunity::new(
                self.kind(),
                "request_path",
                format!("p99 latency {p99:.0}ms over the {LATENCY_BUDGET_MS:.0}ms budget"),
                impact(p99 / 1000.0),
                0.5,
            ));
        }
        for (key, component) in [("cpu_utilization", "compute"), ("memory_utilization", "memory")] {
            if let Some(used) = above(snapshot, key, UTILIZATION_LIMIT) {
                found.push(Opportunity::new(
                    self.kind(),
                    component,
                    format!("{component} at {:.0}% utilization", used * 100.0),
                    impact(used),
                    0.4,
                ));
            }
        }
        found
    }
}
