use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

use super::{above, below, impact, OpportunityDetector};

/// `hot_path_complexity` is the polynomial degree of the hottest path
/// (1.0 linear, 2.0 quadratic, ...).
const LINEAR: f64 = 1.0;
const CACHE_HIT_TARGET: f64 = 0.80;

#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorithmDetector;

impl OpportunityDetector for AlgorithmDetector {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::AlgorithmOptimization
    }

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity> {
        let mut found = Vec::new();

        if let Some(degree) = above(snapshot, "hot_path_complexity", LINEAR) {
            found.push(Opportunity::new(
                self.kind(),
                "hot_path",
                format!("hot path is O(n^{degree:.1}); replace with an indexed lookup"),
                impact(0.3 + 0.4 * (degree - LINEAR)),
                0.6,
            ));
        }
        if let Some(rate) = below(snapshot, "cache_hit_rate", CACHE_HIT_TARGET) {
            found.push(Opportunity::new(
                self.kind(),
                "cache_layer",
                format!("cache hit rate {:.0}%; revisit keys and eviction", rate * 100.0),
                impact(2.0 * (CACHE_HIT_TARGET - rate)),
                0.3,
            ));
        }
        found
    }
}
