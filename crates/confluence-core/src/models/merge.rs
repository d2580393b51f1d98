use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FusedModel, TimeWindow};

/// Why a merge invocation ended in `Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    /// The scheduler found no window above the threshold.
    NoViableWindow,
    /// Cancellation was requested before fusion ran.
    Cancelled,
}

/// Merge orchestrator state machine.
///
/// `Idle → AwaitingWindow → Merging → Done`, with `Aborted` reachable from
/// `Idle` (no viable window) and `AwaitingWindow` (cancellation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MergeState {
    Idle,
    AwaitingWindow { opens_at: DateTime<Utc> },
    Merging,
    Done,
    Aborted { reason: AbortReason },
}

impl MergeState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingWindow { .. } => "awaiting_window",
            Self::Merging => "merging",
            Self::Done => "done",
            Self::Aborted { .. } => "aborted",
        }
    }

    /// `Done` and `Aborted` end an invocation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted { .. })
    }
}

/// Result of a completed merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    /// The window the merge ran in.
    pub window: TimeWindow,
    pub fused: FusedModel,
    /// Intensity of the chosen window.
    pub intensity: f64,
    /// Fused capability count over the largest single subsystem's count.
    pub performance_gain: f64,
    pub capabilities_count: usize,
    pub merged_at: DateTime<Utc>,
}
