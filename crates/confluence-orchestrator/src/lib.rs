//! # confluence-orchestrator
//!
//! `IDLE → AWAITING_WINDOW → MERGING → DONE`, with `ABORTED` reachable from
//! scheduling (no viable window) and from the wait (cancellation).

pub mod gain;
pub mod orchestrator;

pub use gain::performance_gain;
pub use orchestrator::MergeOrchestrator;
