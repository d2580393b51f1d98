/// Merge orchestration errors.
#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error("merge already in progress")]
    AlreadyRunning,
}
