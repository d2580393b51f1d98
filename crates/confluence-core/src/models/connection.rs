use serde::{Deserialize, Serialize};

/// Unordered pair of subsystem ids, stored with the smaller id first so
/// `(a, b)` and `(b, a)` address the same connection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub first: String,
    pub second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.first, self.second)
    }
}

/// Relationship scores between two distinct subsystems.
///
/// All scores are symmetric, so one instance exists per unordered pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub subsystem_a: String,
    pub subsystem_b: String,
    /// How well the two fit together (0.0–1.0).
    pub compatibility_score: f64,
    /// How much each brings that the other lacks (0.0–1.0).
    pub synergy_score: f64,
    /// Estimated integration difficulty (0.0–1.0).
    pub complexity_score: f64,
    /// Expected net effect of integrating the pair (0.0–1.0).
    pub performance_impact: f64,
    /// Deterministic blake3 signature of the pair.
    pub signature: String,
}

impl Connection {
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.subsystem_a, &self.subsystem_b)
    }

    /// Connection strength is the compatibility score.
    pub fn strength(&self) -> f64 {
        self.compatibility_score
    }
}

/// Serde adapter storing a connection matrix as a plain list of connections.
/// Keys are rebuilt from each connection's subsystem ids on the way back in.
pub(crate) mod matrix_as_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Connection, PairKey};

    pub fn serialize<S: Serializer>(
        matrix: &BTreeMap<PairKey, Connection>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let connections: Vec<&Connection> = matrix.values().collect();
        connections.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<PairKey, Connection>, D::Error> {
        let connections = Vec::<Connection>::deserialize(deserializer)?;
        Ok(connections.into_iter().map(|c| (c.key(), c)).collect())
    }
}
