//! # confluence-scheduling
//!
//! Decides *when* things run.
//!
//! - [`signals`]: per-hour scoring models and the registry that names them.
//! - [`scheduler`]: combines registered signals into ranked merge windows.
//! - [`cadence`]: the decaying interval between improvement cycles.
//! - [`suspend`]: the cancellable suspension point shared by the merge wait
//!   and the improvement loop.

pub mod cadence;
pub mod scheduler;
pub mod signals;
pub mod suspend;

pub use cadence::DecayingInterval;
pub use scheduler::{IntensityBlend, SignalDimension, WindowScheduler};
pub use signals::{SignalModel, SignalRegistry};
pub use suspend::suspend_for;
