use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, warn};

use confluence_core::config::FusionConfig;
use confluence_core::models::{
    ArchitectureSummary, Connection, FusedModel, IntegrationLevel, PairKey, Subsystem,
};
use confluence_core::traits::IFusionEngine;

use crate::scoring::{PairScores, PairSide};

/// Capability fusion across N subsystems.
///
/// Every unordered pair is scored exactly once (`N·(N−1)/2` connections).
/// Pair scoring shares no mutable state, so it runs on the rayon pool when
/// `FusionConfig::parallel` is set; results are merged after all pairs finish.
///
/// Fusion reads `capability_set` and `architecture_summary` as given and
/// never falls back to `raw_analysis`; run
/// [`CapabilityExtractor::populate`](crate::CapabilityExtractor::populate)
/// first.
pub struct FusionEngine {
    config: FusionConfig,
}

struct Profile<'a> {
    id: &'a str,
    capabilities: &'a BTreeSet<String>,
    architecture: &'a ArchitectureSummary,
}

impl Profile<'_> {
    fn side(&self) -> PairSide<'_> {
        PairSide {
            capabilities: self.capabilities,
            architecture: self.architecture,
        }
    }
}

impl FusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Score a single pair. Ids are not checked for equality.
    pub fn connect(&self, a: &Subsystem, b: &Subsystem) -> Connection {
        let a = self.profile(a);
        let b = self.profile(b);
        connection_between(&a, &b)
    }

    fn profile<'a>(&self, subsystem: &'a Subsystem) -> Profile<'a> {
        Profile {
            id: &subsystem.id,
            capabilities: &subsystem.capability_set,
            architecture: &subsystem.architecture_summary,
        }
    }

    /// Resolve profiles in input order. A repeated id keeps its first
    /// occurrence; later ones are ignored.
    fn profiles<'a>(&self, subsystems: &'a [Subsystem]) -> Vec<Profile<'a>> {
        let mut seen = HashSet::with_capacity(subsystems.len());
        subsystems
            .iter()
            .filter(|s| {
                let fresh = seen.insert(s.id.as_str());
                if !fresh {
                    warn!(subsystem = %s.id, "duplicate subsystem id ignored during fusion");
                }
                fresh
            })
            .map(|s| self.profile(s))
            .collect()
    }

    fn score_pairs(&self, profiles: &[Profile<'_>]) -> BTreeMap<PairKey, Connection> {
        let pairs: Vec<(usize, usize)> = (0..profiles.len())
            .flat_map(|i| ((i + 1)..profiles.len()).map(move |j| (i, j)))
            .collect();

        let connections: Vec<Connection> = if self.config.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| connection_between(&profiles[i], &profiles[j]))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(i, j)| connection_between(&profiles[i], &profiles[j]))
                .collect()
        };

        connections.into_iter().map(|c| (c.key(), c)).collect()
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}

impl IFusionEngine for FusionEngine {
    fn fuse(&self, subsystems: &[Subsystem]) -> FusedModel {
        let profiles = self.profiles(subsystems);

        let capability_union: BTreeSet<String> = profiles
            .iter()
            .flat_map(|p| p.capabilities.iter().cloned())
            .collect();

        let connection_matrix = self.score_pairs(&profiles);

        let pair_count = connection_matrix.len();
        let (mean_compatibility, network_density) = if pair_count == 0 {
            (0.0, 0.0)
        } else {
            let total: f64 = connection_matrix
                .values()
                .map(|c| c.compatibility_score)
                .sum();
            let strong = connection_matrix
                .values()
                .filter(|c| c.compatibility_score >= self.config.strong_connection_threshold)
                .count();
            (total / pair_count as f64, strong as f64 / pair_count as f64)
        };

        let integration_level = IntegrationLevel::classify(
            mean_compatibility,
            self.config.low_threshold,
            self.config.high_threshold,
        );

        debug!(
            subsystems = profiles.len(),
            capabilities = capability_union.len(),
            connections = pair_count,
            mean_compatibility,
            level = %integration_level,
            "fusion complete"
        );

        FusedModel {
            subsystem_ids: profiles.iter().map(|p| p.id.to_string()).collect(),
            capability_union,
            connection_matrix,
            mean_compatibility,
            integration_level,
            network_density,
            created_at: Utc::now(),
        }
    }
}

fn connection_between(a: &Profile<'_>, b: &Profile<'_>) -> Connection {
    let scores = PairScores::compute(a.side(), b.side());
    debug!(
        a = a.id,
        b = b.id,
        compatibility = scores.compatibility,
        synergy = scores.synergy,
        "scored pair"
    );
    Connection {
        subsystem_a: a.id.to_string(),
        subsystem_b: b.id.to_string(),
        compatibility_score: scores.compatibility,
        synergy_score: scores.synergy,
        complexity_score: scores.complexity,
        performance_impact: scores.performance_impact,
        signature: pair_signature(a.id, b.id),
    }
}

/// blake3 over the sorted pair ids. Order-independent and stable across runs.
pub fn pair_signature(a: &str, b: &str) -> String {
    let key = PairKey::new(a, b);
    let mut hasher = blake3::Hasher::new();
    hasher.update(key.first.as_bytes());
    hasher.update(&[0]);
    hasher.update(key.second.as_bytes());
    hasher.finalize().to_hex().to_string()
}
