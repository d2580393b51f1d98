use std::collections::HashSet;

use confluence_core::models::{FusedModel, Subsystem};

/// `|capability_union| / max single-subsystem capability count`.
///
/// Counts `capability_set` as given; `raw_analysis` is never consulted. When
/// no subsystem has any capability the gain is 1.0. Repeated ids count once,
/// first occurrence, matching fusion.
pub fn performance_gain(fused: &FusedModel, subsystems: &[Subsystem]) -> f64 {
    let mut seen = HashSet::new();
    let largest = subsystems
        .iter()
        .filter(|s| seen.insert(s.id.as_str()))
        .map(|s| s.capability_set.len())
        .max()
        .unwrap_or(0);

    if largest == 0 {
        return 1.0;
    }
    fused.capability_union.len() as f64 / largest as f64
}
