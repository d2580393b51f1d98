//! Candidate generation, one generator per opportunity kind.
//!
//! Every retained opportunity yields exactly one candidate or an `Err` with
//! the reason it was dropped. `OpportunityKind::Other` goes to the generic
//! generator.

use confluence_core::models::{Improvement, Opportunity, OpportunityKind};
use uuid::Uuid;

pub fn generate(opportunity: &Opportunity) -> Result<Improvement, String> {
    if opportunity.component.trim().is_empty() {
        return Err("opportunity has no component".to_string());
    }

    let (plan, requirements) = match &opportunity.kind {
        OpportunityKind::CodeOptimization => (
            format!(
                "Refactor {}: deduplicate, simplify control flow, and extend tests",
                opportunity.component
            ),
            &["unit_tests", "lint", "code_review"][..],
        ),
        OpportunityKind::ArchitectureOptimization => (
            format!(
                "Restructure {}: break cycles and narrow module interfaces",
                opportunity.component
            ),
            &["integration_tests", "dependency_audit", "architecture_review"][..],
        ),
        OpportunityKind::AlgorithmOptimization => (
            format!(
                "Replace the algorithm behind {} with a lower-complexity variant",
                opportunity.component
            ),
            &["unit_tests", "property_tests", "benchmarks"][..],
        ),
        OpportunityKind::PerformanceOptimization => (
            format!("Tune {} against its latency and utilization budget", opportunity.component),
            &["benchmarks", "load_test", "regression_check"][..],
        ),
        OpportunityKind::SecurityEnhancement => (
            format!("Patch and harden {}", opportunity.component),
            &["security_scan", "dependency_audit", "unit_tests"][..],
        ),
        OpportunityKind::Other(kind) => (
            format!("Apply {kind} change to {}", opportunity.component),
            &["unit_tests"][..],
        ),
    };

    Ok(Improvement {
        id: format!("imp-{}", Uuid::new_v4()),
        kind: opportunity.kind.clone(),
        component: opportunity.component.clone(),
        opportunity: opportunity.description.clone(),
        plan,
        expected_improvement: opportunity.impact,
        validation_requirements: requirements.iter().map(|r| r.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opp(kind: OpportunityKind, component: &str) -> Opportunity {
        Opportunity::new(kind, component, "desc", 0.6, 0.3)
    }

    #[test]
    fn each_kind_gets_its_requirements() {
        let cases = [
            (OpportunityKind::CodeOptimization, "lint"),
            (OpportunityKind::ArchitectureOptimization, "architecture_review"),
            (OpportunityKind::AlgorithmOptimization, "property_tests"),
            (OpportunityKind::PerformanceOptimization, "load_test"),
            (OpportunityKind::SecurityEnhancement, "security_scan"),
        ];
        for (kind, requirement) in cases {
            let candidate = generate(&opp(kind.clone(), "svc")).unwrap();
            assert_eq!(candidate.kind, kind);
            assert!(candidate.validation_requirements.iter().any(|r| r == requirement));
        }
    }

    #[test]
    fn other_kind_falls_back_to_generic() {
        let candidate = generate(&opp(OpportunityKind::Other("docs".into()), "readme")).unwrap();
        assert_eq!(candidate.validation_requirements, vec!["unit_tests".to_string()]);
        assert!(candidate.plan.contains("docs"));
        assert!(candidate.plan.contains("readme"));
    }

    #[test]
    fn candidate_carries_opportunity_fields() {
        let candidate = generate(&opp(OpportunityKind::CodeOptimization, "codebase")).unwrap();
        assert!(candidate.id.starts_with("imp-"));
        assert_eq!(candidate.component, "codebase");
        assert_eq!(candidate.opportunity, "desc");
        assert!((candidate.expected_improvement - 0.6).abs() < 1e-12);
    }

    #[test]
    fn ids_are_unique() {
        let o = opp(OpportunityKind::CodeOptimization, "codebase");
        assert_ne!(generate(&o).unwrap().id, generate(&o).unwrap().id);
    }

    #[test]
    fn blank_component_is_dropped() {
        let err = generate(&opp(OpportunityKind::CodeOptimization, "  ")).unwrap_err();
        assert!(err.contains("component"));
    }
}
