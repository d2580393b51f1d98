//! Opportunity detectors.
//!
//! Each detector reads a handful of metrics from the cycle's snapshot and
//! emits zero or more opportunities of its own kind. Missing or non-finite
//! metrics are skipped, never guessed.
//!
//! | Detector      | Metrics                                                        |
//! |---------------|----------------------------------------------------------------|
//! | code          | `duplication_ratio`, `cyclomatic_complexity`, `test_coverage` |
//! | architecture  | `coupling`, `cyclic_dependencies`                              |
//! | algorithm     | `hot_path_complexity`, `cache_hit_rate`                        |
//! | performance   | `latency_p99_ms`, `cpu_utilization`, `memory_utilization`      |
//! | security      | `vulnerability_count`, `outdated_dependencies`                 |

mod algorithm;
mod architecture;
mod code;
mod performance;
mod security;

pub use algorithm::AlgorithmDetector;
pub use architecture::ArchitectureDetector;
pub use code::CodeDetector;
pub use performance::PerformanceDetector;
pub use security::SecurityDetector;

use confluence_core::models::{Opportunity, OpportunityKind, PerformanceSnapshot};

pub trait OpportunityDetector: Send + Sync {
    fn kind(&self) -> OpportunityKind;

    fn detect(&self, snapshot: &PerformanceSnapshot) -> Vec<Opportunity>;
}

/// The five standard detectors in discovery order: code, architecture,
/// algorithm, performance, security. Ranking ties resolve in this order.
pub fn standard_detectors() -> Vec<Box<dyn OpportunityDetector>> {
    vec![
        Box::new(CodeDetector),
        Box::new(ArchitectureDetector),
        Box::new(AlgorithmDetector),
        Box::new(PerformanceDetector),
        Box::new(SecurityDetector),
    ]
}

/// Metric value when it exceeds `limit`.
fn above(snapshot: &PerformanceSnapshot, key: &str, limit: f64) -> Option<f64> {
    snapshot.get(key).filter(|v| *v > limit)
}

/// Metric value when it falls short of `limit`.
fn below(snapshot: &PerformanceSnapshot, key: &str, limit: f64) -> Option<f64> {
    snapshot.get(key).filter(|v| *v < limit)
}

fn impact(raw: f64) -> f64 {
    raw.clamp(0.05, 1.0)
}
