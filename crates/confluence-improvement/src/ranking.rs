//! Opportunity ranking.
//!
//! Invalid entries are dropped, then the rest are sorted by
//! `impact / effort × ledger weight of their kind`, descending, with raw
//! `impact / effort` breaking ties. The sort is stable, so equal keys keep
//! discovery order. Opportunities are returned with the impact their
//! detector reported; the weight only orders them.

use std::cmp::Ordering;

use confluence_core::models::{DroppedOpportunity, Opportunity};

use crate::ledger::LearningLedger;

/// Ranked, truncated opportunities plus everything left out and why.
#[derive(Debug, Clone, Default)]
pub struct Ranked {
    pub retained: Vec<Opportunity>,
    pub dropped: Vec<DroppedOpportunity>,
}

/// Reason an opportunity cannot be ranked, if any.
pub fn invalid_reason(opportunity: &Opportunity) -> Option<&'static str> {
    if !opportunity.impact.is_finite() || !opportunity.effort.is_finite() {
        Some("non-finite impact or effort")
    } else if opportunity.effort <= 0.0 {
        Some("effort must be positive")
    } else if opportunity.impact < 0.0 {
        Some("impact must be non-negative")
    } else {
        None
    }
}

pub fn rank(opportunities: Vec<Opportunity>, ledger: &LearningLedger, top_k: usize) -> Ranked {
    let mut ranked = Ranked::default();
    let mut keyed: Vec<(f64, Opportunity)> = Vec::with_capacity(opportunities.len());

    for opportunity in opportunities {
        if let Some(reason) = invalid_reason(&opportunity) {
            ranked.dropped.push(DroppedOpportunity {
                opportunity,
                reason: reason.to_string(),
            });
            continue;
        }
        let key = opportunity.priority() * ledger.weight(&opportunity.kind);
        keyed.push((key, opportunity));
    }

    keyed.sort_by(|(ka, a), (kb, b)| {
        kb.partial_cmp(ka)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.priority().partial_cmp(&a.priority()).unwrap_or(Ordering::Equal))
    });
    ranked.retained = keyed.into_iter().map(|(_, opportunity)| opportunity).collect();

    if ranked.retained.len() > top_k {
        for opportunity in ranked.retained.split_off(top_k) {
            ranked.dropped.push(DroppedOpportunity {
                opportunity,
                reason: format!("below top {top_k}"),
            });
        }
    }
    ranked
}

#[cfg(test)]
mod tests {
    use confluence_core::models::OpportunityKind;

    use super::*;

    fn opp(component: &str, impact: f64, effort: f64) -> Opportunity {
        Opportunity::new(OpportunityKind::CodeOptimization, component, component, impact, effort)
    }

    #[test]
    fn sorts_by_priority_descending() {
        let ranked = rank(
            vec![opp("a", 0.2, 1.0), opp("b", 0.9, 0.3), opp("c", 0.5, 0.5)],
            &LearningLedger::new(),
            10,
        );
        let order: Vec<&str> = ranked.retained.iter().map(|o| o.component.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert!(ranked.dropped.is_empty());
    }

    #[test]
    fn ties_keep_discovery_order() {
        let ranked = rank(
            vec![opp("first", 0.4, 0.2), opp("second", 0.2, 0.1), opp("third", 0.8, 0.4)],
            &LearningLedger::new(),
            10,
        );
        let order: Vec<&str> = ranked.retained.iter().map(|o| o.component.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn truncates_to_top_k_and_records_the_rest() {
        let input: Vec<Opportunity> = (1..=12).map(|i| opp(&format!("o{i}"), i as f64 / 12.0, 1.0)).collect();
        let ranked = rank(input, &LearningLedger::new(), 10);
        assert_eq!(ranked.retained.len(), 10);
        assert_eq!(ranked.dropped.len(), 2);
        assert_eq!(ranked.retained[0].component, "o12");
        assert!(ranked.dropped.iter().all(|d| d.reason == "below top 10"));
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let ranked = rank(
            vec![
                opp("zero-effort", 0.5, 0.0),
                opp("negative-impact", -0.1, 0.5),
                opp("nan", f64::NAN, 0.5),
                opp("ok", 0.5, 0.5),
            ],
            &LearningLedger::new(),
            10,
        );
        assert_eq!(ranked.retained.len(), 1);
        assert_eq!(ranked.dropped.len(), 3);
        assert_eq!(ranked.dropped[0].reason, "effort must be positive");
        assert_eq!(ranked.dropped[1].reason, "impact must be non-negative");
        assert_eq!(ranked.dropped[2].reason, "non-finite impact or effort");
    }

    #[test]
    fn ledger_weight_reorders_kinds() {
        let mut ledger = LearningLedger::new();
        for _ in 0..20 {
            ledger.record(&OpportunityKind::CodeOptimization, false);
        }
        let code = Opportunity::new(OpportunityKind::CodeOptimization, "code", "", 0.5, 0.5);
        let perf = Opportunity::new(OpportunityKind::PerformanceOptimization, "perf", "", 0.45, 0.5);
        let ranked = rank(vec![code, perf], &ledger, 10);
        assert_eq!(ranked.retained[0].component, "perf");
        assert_eq!(ranked.retained[0].impact, 0.45);
        assert_eq!(ranked.retained[1].impact, 0.5);
    }

    #[test]
    fn retained_and_cut_entries_keep_detector_impact() {
        let mut ledger = LearningLedger::new();
        for _ in 0..5 {
            ledger.record(&OpportunityKind::CodeOptimization, true);
            ledger.record(&OpportunityKind::SecurityEnhancement, false);
        }
        let input = vec![
            Opportunity::new(OpportunityKind::CodeOptimization, "a", "", 0.3, 0.5),
            Opportunity::new(OpportunityKind::SecurityEnhancement, "b", "", 0.9, 0.3),
            Opportunity::new(OpportunityKind::CodeOptimization, "c", "", 0.7, 0.7),
        ];
        let ranked = rank(input, &ledger, 2);

        let mut seen: Vec<(&str, f64)> = ranked
            .retained
            .iter()
            .chain(ranked.dropped.iter().map(|d| &d.opportunity))
            .map(|o| (o.component.as_str(), o.impact))
            .collect();
        seen.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(seen, vec![("a", 0.3), ("b", 0.9), ("c", 0.7)]);
    }
}
