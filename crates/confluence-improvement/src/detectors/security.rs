use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

use super::{above, impact, OpportunityDetector};

const OUTDATED_LIMIT: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityDetector;

impl OpportunityDetector for SecurityDetector {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::SecurityEnhancement
    }

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity> {
        let mut found = Vec::new();

        if let Some(count) = above(snapshot, "vulnerability_count", 0.0) {
            found.push(Opportunity::new(
                self.kind(),
                "dependencies",
                format!("{count:.0} known vulnerabilities; patch or replace affected crates"),
                impact(0.25 + 0.25 * count),
                0.2,
            ));
        }
        if let Some(outdated) = above(snapshot, "outdated_dependencies", OUTDATED_LIMIT) {
            found.push(Opportunity::new(
                self.kind(),
                "dependency_manifest",
                format!("{outdated:.0} outdated dependencies"),
                impact(0.2 + outdated / 30.0),
                0.3,
            ));
        }
        found
    }
}
