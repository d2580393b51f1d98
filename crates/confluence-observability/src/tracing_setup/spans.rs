//! Span definitions per operation: schedule, merge, fusion, improvement cycle.

/// Create a window-scheduling span.
#[macro_export]
macro_rules! schedule_span {
    ($horizon_hours:expr, $threshold:expr) => {
        tracing::info_span!(
            "confluence.schedule",
            horizon_hours = $horizon_hours,
            threshold = $threshold
        )
    };
}

/// Create a merge span covering window wait and fusion.
#[macro_export]
macro_rules! merge_span {
    ($subsystem_count:expr) => {
        tracing::info_span!("confluence.merge", subsystem_count = $subsystem_count)
    };
}

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($subsystem_count:expr) => {
        tracing::info_span!("confluence.fusion", subsystem_count = $subsystem_count)
    };
}

/// Create an improvement-cycle span.
#[macro_export]
macro_rules! improvement_cycle_span {
    ($cycle_number:expr) => {
        tracing::info_span!("confluence.improvement_cycle", cycle = $cycle_number)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCHEDULE: &str = "confluence.schedule";
    pub const MERGE: &str = "confluence.merge";
    pub const FUSION: &str = "confluence.fusion";
    pub const IMPROVEMENT_CYCLE: &str = "confluence.improvement_cycle";
}
