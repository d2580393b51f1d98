//! # confluence-improvement
//!
//! One iteration of the loop is one [`ImprovementCycle`]:
//! snapshot → detect → rank → generate → validate → deploy → learn → wait.
//!
//! - [`detectors`]: five independent opportunity detectors over a snapshot.
//! - [`ranking`]: learning-weighted, stable priority sort with a top-K cut.
//! - [`generators`]: per-kind candidate generation with a generic fallback.
//! - [`ledger`]: per-kind acceptance history feeding the next ranking.
//! - [`history`]: bounded ring of completed cycles.
//! - [`engine`]: the loop itself.
//!
//! [`ImprovementCycle`]: confluence_core::models::ImprovementCycle

pub mod detectors;
pub mod engine;
pub mod generators;
pub mod history;
pub mod ledger;
pub mod ranking;

pub use detectors::{standard_detectors, OpportunityDetector};
pub use engine::{ImprovementLoop, LoopHandle};
pub use history::CycleHistory;
pub use ledger::LearningLedger;
