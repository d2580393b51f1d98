use super::{jaccard, style_affinity, PairSide};

const INTERFACE_WEIGHT: f64 = 0.40;
const STYLE_WEIGHT: f64 = 0.30;
const SIZE_WEIGHT: f64 = 0.30;
/// Combined component count at which the size term reaches 0.5.
const SIZE_HALF_POINT: f64 = 20.0;

/// Integration cost. Higher is harder.
pub fn score(a: PairSide<'_>, b: PairSide<'_>) -> f64 {
    let interface_gap = 1.0 - jaccard(&a.architecture.interfaces, &b.architecture.interfaces);
    let style_mismatch = 1.0 - style_affinity(a.architecture, b.architecture);
    let components = (a.architecture.component_count + b.architecture.component_count) as f64;
    let size = components / (components + SIZE_HALF_POINT);

    (INTERFACE_WEIGHT * interface_gap + STYLE_WEIGHT * style_mismatch + SIZE_WEIGHT * size)
        .clamp(0.0, 1.0)
}
