use super::{jaccard, PairSide};

/// Complementarity: peaks at half overlap, zero for identical or disjoint sets.
pub fn score(a: PairSide<'_>, b: PairSide<'_>) -> f64 {
    let j = jaccard(a.capabilities, b.capabilities);
    (2.0 * (j * (1.0 - j)).sqrt()).clamp(0.0, 1.0)
}
