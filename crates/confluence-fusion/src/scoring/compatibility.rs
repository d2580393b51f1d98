use super::{jaccard, style_affinity, PairSide};

const CAPABILITY_WEIGHT: f64 = 0.60;
const LANGUAGE_WEIGHT: f64 = 0.25;
const STYLE_WEIGHT: f64 = 0.15;

/// How much the two subsystems already have in common.
pub fn score(a: PairSide<'_>, b: PairSide<'_>) -> f64 {
    let capabilities = jaccard(a.capabilities, b.capabilities);
    let languages = jaccard(&a.architecture.languages, &b.architecture.languages);
    let style = style_affinity(a.architecture, b.architecture);
    (CAPABILITY_WEIGHT * capabilities + LANGUAGE_WEIGHT * languages + STYLE_WEIGHT * style)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use confluence_core::models::ArchitectureSummary;

    use super::*;

    #[test]
    fn identical_sides_score_one() {
        let caps: BTreeSet<String> = ["x".to_string()].into();
        let arch = ArchitectureSummary {
            style: Some("layered".into()),
            languages: ["rs".to_string()].into(),
            ..Default::default()
        };
        let side = PairSide { capabilities: &caps, architecture: &arch };
        assert!((score(side, side) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_sides_with_unknown_style_score_style_half() {
        let a_caps: BTreeSet<String> = ["x".to_string()].into();
        let b_caps: BTreeSet<String> = ["y".to_string()].into();
        let arch = ArchitectureSummary::default();
        let a = PairSide { capabilities: &a_caps, architecture: &arch };
        let b = PairSide { capabilities: &b_caps, architecture: &arch };
        assert!((score(a, b) - 0.075).abs() < 1e-12);
    }
}
