/// Expected performance effect of merging the pair, from the other three scores.
pub fn score(compatibility: f64, synergy: f64, complexity: f64) -> f64 {
    (0.5 * synergy + 0.5 * compatibility - 0.25 * complexity).clamp(0.0, 1.0)
}
