// Single source of truth for all default values.

// --- Scheduler ---
pub const DEFAULT_HORIZON_HOURS: i64 = 168; // 7 days
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 3.5;

// --- Fusion ---
pub const DEFAULT_LOW_INTEGRATION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_HIGH_INTEGRATION_THRESHOLD: f64 = 0.7;
pub const DEFAULT_STRONG_CONNECTION_THRESHOLD: f64 = 0.6;
pub const DEFAULT_PARALLEL_FUSION: bool = true;

// --- Improvement loop ---
pub const DEFAULT_BASE_INTERVAL_SECS: f64 = 3600.0; // 1 hour
pub const DEFAULT_FLOOR_INTERVAL_SECS: f64 = 300.0; // 5 minutes
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
