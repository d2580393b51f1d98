//! Data model shared by the scheduler, fusion engine, orchestrator, and
//! improvement loop. Every record here is produced once and then published
//! read-only; nothing mutates a model after creation.

pub mod connection;
pub mod cycle;
pub mod fused_model;
pub mod improvement;
pub mod merge;
pub mod opportunity;
pub mod snapshot;
pub mod subsystem;
pub mod time_window;

pub use connection::{Connection, PairKey};
pub use cycle::ImprovementCycle;
pub use fused_model::{FusedModel, IntegrationLevel};
pub use improvement::{DeploymentAck, Improvement, RejectedImprovement, ValidationVerdict};
pub use merge::{AbortReason, MergeResult, MergeState};
pub use opportunity::{DroppedOpportunity, Opportunity, OpportunityKind};
pub use snapshot::PerformanceSnapshot;
pub use subsystem::{ArchitectureSummary, RawAnalysis, Subsystem};
pub use time_window::TimeWindow;
