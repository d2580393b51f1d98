use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

use super::{above, below, impact, OpportunityDetector};

const DUPLICATION_LIMIT: f64 = 0.05;
const COMPLEXITY_LIMIT: f64 = 10.0;
const COVERAGE_TARGET: f64 = 0.80;

/// Duplication, complexity, and coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeDetector;

impl OpportunityDetector for CodeDetector {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::CodeOptimization
    }

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity> {
        let mut found = Vec::new();

        if let Some(ratio) = above(snapshot, "duplication_ratio", DUPLICATION_LIMIT) {
            found.push(Opportunity::new(
                self.kind(),
                "codebase",
                format!("{:.0}% duplicated code; extract shared helpers", ratio * 100.0),
                impact(ratio * 4.0),
                0.3,
            ));
        }
        if let Some(cc) = above(snapshot, "cyclomatic_complexity", COMPLEXITY_LIMIT) {
            found.push(Opportunity::new(
                self.kind(),
                "hot_modules",
                format!("mean cyclomatic complexity {cc:.1}; split branching functions"),
                impact(0.3 + (cc - COMPLEXITY_LIMIT) / 20.0),
                0.5,
            ));
        }
        if let Some(coverage) = below(snapshot, "test_coverage", COVERAGE_TARGET) {
            found.push(Opportunity::new(
                self.kind(),
                "test_suite",
                format!("test coverage {:.0}%; cover untested paths", coverage * 100.0),
                impact(0.2 + (COVERAGE_TARGET - coverage)),
                0.6,
            ));
        }
        found
    }
}
