use crate::models::{FusedModel, Subsystem};

/// Capability fusion across subsystems.
///
/// Infallible: fewer than two subsystems degrade to an empty connection
/// matrix rather than an error.
pub trait IFusionEngine: Send + Sync {
    fn fuse(&self, subsystems: &[Subsystem]) -> FusedModel;
}
