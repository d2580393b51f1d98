use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

use super::{above, impact, OpportunityDetector};

const COUPLING_LIMIT: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchitectureDetector;

impl OpportunityDetector for ArchitectureDetector {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::ArchitectureOptimization
    }

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity> {
        let mut found = Vec::new();

        if let Some(coupling) = above(snapshot, "coupling", COUPLING_LIMIT) {
            found.push(Opportunity::new(
                self.kind(),
                "module_graph",
                format!("coupling {coupling:.2}; introduce boundaries between modules"),
                impact(coupling),
                0.8,
            ));
        }
        if let Some(cycles) = above(snapshot, "cyclic_dependencies", 0.0) {
            found.push(Opportunity::new(
                self.kind(),
                "dependency_graph",
                format!("{cycles:.0} dependency cycles; invert or extract shared interfaces"),
                impact(0.3 + 0.2 * cycles),
                0.7,
            ));
        }
        found
    }
}
