//! Per-kind validation outcomes carried from one cycle to the next.

use std::collections::BTreeMap;

use confluence_core::models::OpportunityKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    accepted: u64,
    rejected: u64,
}

/// Accepted/rejected counts per opportunity kind.
///
/// The ranking weight is a Laplace-smoothed acceptance rate mapped into
/// `[0.5, 1.0]`: an unseen kind weighs 0.75, a kind that keeps failing
/// validation approaches 0.5 and never reaches zero.
#[derive(Debug, Clone, Default)]
pub struct LearningLedger {
    tallies: BTreeMap<OpportunityKind, Tally>,
}

impl LearningLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: &OpportunityKind, accepted: bool) {
        let tally = self.tallies.entry(kind.clone()).or_default();
        if accepted {
            tally.accepted += 1;
        } else {
            tally.rejected += 1;
        }
    }

    pub fn weight(&self, kind: &OpportunityKind) -> f64 {
        let tally = self.tallies.get(kind).copied().unwrap_or_default();
        let total = (tally.accepted + tally.rejected) as f64;
        0.5 + 0.5 * (tally.accepted as f64 + 1.0) / (total + 2.0)
    }

    pub fn accepted(&self, kind: &OpportunityKind) -> u64 {
        self.tallies.get(kind).map_or(0, |t| t.accepted)
    }

    pub fn rejected(&self, kind: &OpportunityKind) -> u64 {
        self.tallies.get(kind).map_or(0, |t| t.rejected)
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}
