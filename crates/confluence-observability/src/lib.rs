//! # confluence-observability
//!
//! Structured tracing (subscriber setup, span macros, event helpers), metrics
//! collectors for merges and improvement cycles, and flat report records for
//! an external presentation layer.

pub mod metrics;
pub mod reports;
pub mod tracing_setup;

pub use metrics::{ImprovementMetricsCollector, MergeMetricsCollector};
pub use reports::{CycleReport, MergeReport};
pub use tracing_setup::try_init_from_config;
