use crate::errors::ConfluenceResult;
use crate::models::{DeploymentAck, Improvement};

/// External deployment collaborator.
pub trait IDeployer: Send + Sync {
    fn deploy(&self, candidate: &Improvement) -> ConfluenceResult<DeploymentAck>;
}
