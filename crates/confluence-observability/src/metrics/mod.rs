//! Metrics collection: merge outcomes and improvement-cycle throughput.

mod improvement_metrics;
mod merge_metrics;

pub use improvement_metrics::ImprovementMetricsCollector;
pub use merge_metrics::MergeMetricsCollector;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
