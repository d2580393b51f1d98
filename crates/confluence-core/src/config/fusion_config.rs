use serde::{Deserialize, Serialize};

use super::defaults;

/// Fusion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Mean compatibility below this is `LOW` integration.
    pub low_threshold: f64,
    /// Mean compatibility at or above this is `HIGH` integration.
    pub high_threshold: f64,
    /// Pairs at or above this compatibility count toward network density.
    pub strong_connection_threshold: f64,
    /// Score pairs on the rayon pool instead of sequentially.
    pub parallel: bool,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            low_threshold: defaults::DEFAULT_LOW_INTEGRATION_THRESHOLD,
            high_threshold: defaults::DEFAULT_HIGH_INTEGRATION_THRESHOLD,
            strong_connection_threshold: defaults::DEFAULT_STRONG_CONNECTION_THRESHOLD,
            parallel: defaults::DEFAULT_PARALLEL_FUSION,
        }
    }
}
