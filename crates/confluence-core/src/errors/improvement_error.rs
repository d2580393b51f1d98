/// Improvement loop errors. All of them are local to one cycle.
#[derive(Debug, thiserror::Error)]
pub enum ImprovementError {
    #[error("performance probe failed: {reason}")]
    ProbeFailed { reason: String },

    #[error("candidate {candidate_id} rejected: {reason}")]
    ValidationRejected { candidate_id: String, reason: String },

    #[error("deployment of {candidate_id} failed: {reason}")]
    DeploymentFailed { candidate_id: String, reason: String },
}
