//! Collaborator seams. Everything on the other side of these traits is
//! external: the fusion implementation, the test/validation harness, the
//! deployment target, the metrics source, and the wall clock.

mod clock;
mod deployer;
mod fusion;
mod probe;
mod validation;

pub use clock::{IClock, SystemClock};
pub use deployer::IDeployer;
pub use fusion::IFusionEngine;
pub use probe::IPerformanceProbe;
pub use validation::IValidationHarness;
