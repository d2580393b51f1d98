use super::{ConfigError, ImprovementError, OrchestrationError, SchedulingError};

/// Result alias used across the workspace.
pub type ConfluenceResult<T> = Result<T, ConfluenceError>;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    #[error("scheduling error: {0}")]
    Scheduling(#[from] SchedulingError),

    #[error("orchestration error: {0}")]
    Orchestration(#[from] OrchestrationError),

    #[error("improvement error: {0}")]
    Improvement(#[from] ImprovementError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cancellation requested")]
    Cancelled,
}

impl ConfluenceError {
    /// Whether the error is local to one invocation or cycle.
    ///
    /// Cancellation and configuration errors are not: the first must always
    /// stop the caller, the second will repeat on every attempt.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::Config(_))
    }

    /// Whether this is the scheduler's "no viable window" signal.
    pub fn is_no_viable_window(&self) -> bool {
        matches!(
            self,
            Self::Scheduling(SchedulingError::NoViableWindow { .. })
        )
    }
}
