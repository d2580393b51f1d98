//! The four pairwise scores. Each is a pure function of two capability sets
//! and two architecture summaries, bounded to [0.0, 1.0].
//!
//! ```text
//! compatibility = 0.60·J(caps) + 0.25·J(languages) + 0.15·style_affinity
//! synergy       = 2·sqrt(J(caps)·(1 − J(caps)))
//! complexity    = 0.40·(1 − J(interfaces)) + 0.30·(1 − style_affinity)
//!               + 0.30·(components / (components + 20))
//! performance   = clamp(0.5·synergy + 0.5·compatibility − 0.25·complexity)
//! ```
//!
//! `J` is the Jaccard index; two empty sets score 0.

pub mod compatibility;
pub mod complexity;
pub mod performance;
pub mod synergy;

use std::collections::BTreeSet;

use confluence_core::models::ArchitectureSummary;

/// One side of a pair: what the scores read.
#[derive(Debug, Clone, Copy)]
pub struct PairSide<'a> {
    pub capabilities: &'a BTreeSet<String>,
    pub architecture: &'a ArchitectureSummary,
}

/// All four scores for one unordered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScores {
    pub compatibility: f64,
    pub synergy: f64,
    pub complexity: f64,
    pub performance_impact: f64,
}

impl PairScores {
    pub fn compute(a: PairSide<'_>, b: PairSide<'_>) -> Self {
        let compatibility = compatibility::score(a, b);
        let synergy = synergy::score(a, b);
        let complexity = complexity::score(a, b);
        Self {
            compatibility,
            synergy,
            complexity,
            performance_impact: performance::score(compatibility, synergy, complexity),
        }
    }
}

/// Jaccard index, 0.0 for two empty sets.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 1.0 for matching styles, 0.0 for different ones, 0.5 when either is unknown.
pub fn style_affinity(a: &ArchitectureSummary, b: &ArchitectureSummary) -> f64 {
    match (&a.style, &b.style) {
        (Some(x), Some(y)) if x == y => 1.0,
        (Some(_), Some(_)) => 0.0,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn jaccard_edge_cases() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&set(&["a"]), &set(&["a"])), 1.0);
        assert_eq!(jaccard(&set(&["a", "b"]), &set(&["b", "c"])), 1.0 / 3.0);
        assert_eq!(jaccard(&set(&["a"]), &set(&["b"])), 0.0);
    }

    #[test]
    fn scores_are_symmetric_and_bounded() {
        let caps_a = set(&["a", "b", "c"]);
        let caps_b = set(&["c", "d"]);
        let arch_a = ArchitectureSummary {
            style: Some("layered".into()),
            component_count: 7,
            languages: set(&["rs"]),
            interfaces: set(&["rest"]),
        };
        let arch_b = ArchitectureSummary {
            style: Some("event_driven".into()),
            component_count: 2,
            languages: set(&["rs", "py"]),
            interfaces: set(&["rest", "grpc"]),
        };
        let a = PairSide { capabilities: &caps_a, architecture: &arch_a };
        let b = PairSide { capabilities: &caps_b, architecture: &arch_b };

        let ab = PairScores::compute(a, b);
        let ba = PairScores::compute(b, a);
        assert_eq!(ab, ba);
        for score in [ab.compatibility, ab.synergy, ab.complexity, ab.performance_impact] {
            assert!((0.0..=1.0).contains(&score), "{score} out of range");
        }
    }
}
