use chrono::{DateTime, Utc};

/// Source of the current time, so window selection can be tested against a
/// fixed instant.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
