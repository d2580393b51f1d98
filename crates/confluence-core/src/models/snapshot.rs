use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Performance metrics taken at the start of an improvement cycle.
///
/// The metric map is opaque to the loop; only the detectors interpret keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub taken_at: DateTime<Utc>,
    /// The measured component; detectors attach opportunities to it.
    pub subject: String,
    pub metrics: BTreeMap<String, f64>,
}

impl PerformanceSnapshot {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            taken_at: Utc::now(),
            subject: subject.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Metric value, ignoring non-finite entries.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied().filter(|v| v.is_finite())
    }
}
