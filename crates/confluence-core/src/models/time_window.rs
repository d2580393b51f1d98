use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate merge window produced by the window scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window.
    pub timestamp: DateTime<Utc>,
    /// Offset from the evaluation base time, in hours.
    pub hour_offset: i64,
    /// UTC hour of day the signal models were evaluated at.
    pub hour_of_day: u32,
    /// Weighted sum of the convergence dimension scores.
    pub convergence_score: f64,
    /// Weighted blend of the intensity dimensions, in [0.0, 1.0].
    pub intensity: f64,
}

impl TimeWindow {
    /// Time left until the window opens, or `None` if it is already open.
    pub fn wait_from(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        (self.timestamp - now).to_std().ok().filter(|d| !d.is_zero())
    }
}
