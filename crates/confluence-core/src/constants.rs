/// Confluence system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hours in a day; signal models are defined for hours `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u32 = 24;

/// Tolerance when checking that intensity weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "CONFLUENCE_LOG";

/// Prefix for configuration environment overrides.
pub const ENV_PREFIX: &str = "CONFLUENCE_";

/// Upper bound on `scheduler.horizon_hours` (one leap year).
pub const MAX_HORIZON_HOURS: i64 = 366 * HOURS_PER_DAY as i64;
