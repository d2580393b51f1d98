use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, DurationRound, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, Instrument};

use confluence_core::cancellation::{Cancellable, CancellationToken};
use confluence_core::config::SchedulerConfig;
use confluence_core::errors::{
    ConfluenceError, ConfluenceResult, OrchestrationError, SchedulingError,
};
use confluence_core::models::{AbortReason, MergeResult, MergeState, Subsystem, TimeWindow};
use confluence_core::traits::{IClock, IFusionEngine, SystemClock};
use confluence_fusion::FusionEngine;
use confluence_observability::tracing_setup::events;
use confluence_observability::{fusion_span, merge_span, schedule_span};
use confluence_scheduling::signals::standard;
use confluence_scheduling::{suspend_for, SignalDimension, WindowScheduler};

use crate::gain::performance_gain;

/// Runs one merge per [`merge`](Self::merge) call: pick the best window,
/// wait for it, fuse, package the result.
///
/// At most one merge runs per orchestrator at a time. State transitions are
/// published on a `watch` channel; each call starts again from `Idle`.
pub struct MergeOrchestrator<F = FusionEngine, C = SystemClock> {
    scheduler: WindowScheduler,
    dimensions: Vec<SignalDimension>,
    config: SchedulerConfig,
    fusion: F,
    clock: C,
    state: watch::Sender<MergeState>,
    running: AtomicBool,
}

/// Clears the running flag when a merge finishes or its future is dropped.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<F: IFusionEngine, C: IClock> MergeOrchestrator<F, C> {
    pub fn new(
        scheduler: WindowScheduler,
        dimensions: Vec<SignalDimension>,
        config: SchedulerConfig,
        fusion: F,
        clock: C,
    ) -> Self {
        let (state, _) = watch::channel(MergeState::Idle);
        Self {
            scheduler,
            dimensions,
            config,
            fusion,
            clock,
            state,
            running: AtomicBool::new(false),
        }
    }

    /// Orchestrator over the standard signal set.
    pub fn standard(config: SchedulerConfig, fusion: F, clock: C) -> Result<Self, SchedulingError> {
        Ok(Self::new(
            WindowScheduler::standard()?,
            standard::convergence_dimensions(),
            config,
            fusion,
            clock,
        ))
    }

    pub fn state(&self) -> MergeState {
        self.state.borrow().clone()
    }

    /// Receiver for every state transition.
    pub fn subscribe(&self) -> watch::Receiver<MergeState> {
        self.state.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Wait for the best window within the horizon, then fuse `subsystems`.
    ///
    /// Errors:
    /// - `Scheduling(NoViableWindow)`: nothing cleared the threshold; state `Aborted`.
    /// - `Cancelled`: `token` fired before fusion started; state `Aborted`,
    ///   fusion never ran.
    /// - `Orchestration(AlreadyRunning)`: another merge is in progress on
    ///   this orchestrator; its state is left untouched.
    pub async fn merge(
        &self,
        subsystems: &[Subsystem],
        token: &CancellationToken,
    ) -> ConfluenceResult<MergeResult> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(OrchestrationError::AlreadyRunning.into());
        }
        let _guard = RunGuard(&self.running);

        self.run(subsystems, token)
            .instrument(merge_span!(subsystems.len()))
            .await
    }

    async fn run(
        &self,
        subsystems: &[Subsystem],
        token: &CancellationToken,
    ) -> ConfluenceResult<MergeResult> {
        self.transition(MergeState::Idle);
        if token.is_cancelled() {
            return Err(self.abort(AbortReason::Cancelled, ConfluenceError::Cancelled));
        }

        let window = match self.select_window() {
            Ok(window) => window,
            Err(e) => return Err(self.abort(AbortReason::NoViableWindow, e.into())),
        };
        events::window_selected(window.timestamp, window.convergence_score, window.intensity);

        if let Some(wait) = window.wait_from(self.clock.now()) {
            self.transition(MergeState::AwaitingWindow {
                opens_at: window.timestamp,
            });
            if let Err(e) = suspend_for(wait, token).await {
                return Err(self.abort(AbortReason::Cancelled, e));
            }
        }
        // The window may already be open; a cancel that arrived meanwhile
        // still wins over fusion.
        if token.is_cancelled() {
            return Err(self.abort(AbortReason::Cancelled, ConfluenceError::Cancelled));
        }

        self.transition(MergeState::Merging);
        let fused = fusion_span!(subsystems.len()).in_scope(|| self.fusion.fuse(subsystems));

        let result = MergeResult {
            intensity: window.intensity,
            performance_gain: performance_gain(&fused, subsystems),
            capabilities_count: fused.capability_union.len(),
            merged_at: self.clock.now(),
            window,
            fused,
        };
        events::merge_completed(
            result.capabilities_count,
            result.fused.total_connections(),
            result.fused.integration_level.as_str(),
            result.performance_gain,
        );
        self.transition(MergeState::Done);
        Ok(result)
    }

    /// Best window from the top of the current hour.
    fn select_window(&self) -> Result<TimeWindow, SchedulingError> {
        let base = hour_start(self.clock.now());
        schedule_span!(self.config.horizon_hours, self.config.threshold).in_scope(|| {
            self.scheduler.best_window(
                base,
                &self.dimensions,
                self.config.horizon_hours,
                self.config.threshold,
            )
        })
    }

    fn transition(&self, next: MergeState) {
        debug!(state = next.name(), "merge state");
        self.state.send_replace(next);
    }

    fn abort(&self, reason: AbortReason, error: ConfluenceError) -> ConfluenceError {
        let label = match reason {
            AbortReason::NoViableWindow => "no_viable_window",
            AbortReason::Cancelled => "cancelled",
        };
        events::merge_aborted(label);
        self.transition(MergeState::Aborted { reason });
        error
    }
}

impl<F, C> MergeOrchestrator<F, C>
where
    F: IFusionEngine + 'static,
    C: IClock + 'static,
{
    /// Run [`merge`](Self::merge) as an independent task.
    pub fn spawn(
        self: Arc<Self>,
        subsystems: Vec<Subsystem>,
        token: CancellationToken,
    ) -> JoinHandle<ConfluenceResult<MergeResult>> {
        tokio::spawn(async move { self.merge(&subsystems, &token).await })
    }
}

fn hour_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.duration_trunc(chrono::Duration::hours(1)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn hour_start_truncates_minutes_and_seconds() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 13, 47, 12).unwrap();
        assert_eq!(
            hour_start(now),
            Utc.with_ymd_and_hms(2026, 5, 1, 13, 0, 0).unwrap()
        );
    }

    #[test]
    fn starts_idle_and_not_running() {
        let orchestrator = MergeOrchestrator::standard(
            SchedulerConfig::default(),
            FusionEngine::default(),
            SystemClock,
        )
        .unwrap();
        assert_eq!(orchestrator.state(), MergeState::Idle);
        assert!(!orchestrator.is_running());
    }
}
