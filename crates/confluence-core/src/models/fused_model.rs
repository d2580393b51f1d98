use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Connection, PairKey};

/// Integration category derived from mean pairwise compatibility.
///
/// `LOW` below the low threshold, `HIGH` at or above the high threshold,
/// `MEDIUM` in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntegrationLevel {
    Low,
    Medium,
    High,
}

impl IntegrationLevel {
    /// Classify a mean compatibility score. Pure and deterministic.
    pub fn classify(mean_compatibility: f64, low_threshold: f64, high_threshold: f64) -> Self {
        if mean_compatibility < low_threshold {
            Self::Low
        } else if mean_compatibility < high_threshold {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl std::fmt::Display for IntegrationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The consolidated model produced by one fusion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedModel {
    /// Fused subsystem ids in input order, duplicates removed.
    pub subsystem_ids: Vec<String>,
    /// Deduplicated union of every subsystem's capability set.
    pub capability_union: BTreeSet<String>,
    /// One connection per unordered pair. Serialized as a list, since JSON
    /// object keys must be strings.
    #[serde(with = "super::connection::matrix_as_list")]
    pub connection_matrix: BTreeMap<PairKey, Connection>,
    /// Mean compatibility over all pairs; 0.0 when there are no pairs.
    pub mean_compatibility: f64,
    pub integration_level: IntegrationLevel,
    /// Share of pairs whose compatibility reaches the strong-connection threshold.
    pub network_density: f64,
    pub created_at: DateTime<Utc>,
}

impl FusedModel {
    pub fn total_connections(&self) -> usize {
        self.connection_matrix.len()
    }

    /// Look up the connection between two subsystems in either order.
    pub fn connection(&self, a: &str, b: &str) -> Option<&Connection> {
        self.connection_matrix.get(&PairKey::new(a, b))
    }
}
