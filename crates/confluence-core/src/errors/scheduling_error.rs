/// Window scheduling errors.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("intensity weights must sum to 1.0, got {sum:.6}")]
    InvalidIntensityWeights { sum: f64 },

    #[error("invalid weight {weight} for dimension {dimension}")]
    InvalidWeight { dimension: String, weight: f64 },

    #[error("no viable window above threshold {threshold:.3} within {horizon_hours}h")]
    NoViableWindow { threshold: f64, horizon_hours: i64 },
}
