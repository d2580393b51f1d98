//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields and an
//! `event` field naming it.

use chrono::{DateTime, Utc};

/// Log the window chosen for a merge.
pub fn window_selected(opens_at: DateTime<Utc>, convergence_score: f64, intensity: f64) {
    tracing::info!(
        event = "window_selected",
        opens_at = %opens_at,
        convergence_score = convergence_score,
        intensity = intensity,
        "merge window selected"
    );
}

/// Log a completed merge.
pub fn merge_completed(
    capabilities: usize,
    connections: usize,
    integration_level: &str,
    performance_gain: f64,
) {
    tracing::info!(
        event = "merge_completed",
        capabilities = capabilities,
        connections = connections,
        integration_level = %integration_level,
        performance_gain = performance_gain,
        "merge completed"
    );
}

/// Log an aborted merge.
pub fn merge_aborted(reason: &str) {
    tracing::warn!(event = "merge_aborted", reason = %reason, "merge aborted");
}

/// Log a finished improvement cycle.
pub fn cycle_completed(cycle: u64, applied: usize, rejected: usize, next_wait_secs: f64) {
    tracing::info!(
        event = "cycle_completed",
        cycle = cycle,
        applied = applied,
        rejected = rejected,
        next_wait_secs = next_wait_secs,
        "improvement cycle completed"
    );
}

/// Log a candidate improvement that failed validation or deployment.
pub fn candidate_rejected(candidate_id: &str, kind: &str, reason: &str) {
    tracing::warn!(
        event = "candidate_rejected",
        candidate_id = %candidate_id,
        kind = %kind,
        reason = %reason,
        "candidate rejected"
    );
}

/// Log an opportunity that produced no candidate.
pub fn opportunity_dropped(component: &str, kind: &str, reason: &str) {
    tracing::warn!(
        event = "opportunity_dropped",
        component = %component,
        kind = %kind,
        reason = %reason,
        "opportunity dropped"
    );
}
