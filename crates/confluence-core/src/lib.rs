//! # confluence-core
//!
//! Foundation crate for the Confluence merge scheduler.
//! Defines the data model, collaborator traits, errors, config, cancellation,
//! and constants. Every other crate in the workspace depends on this.

pub mod cancellation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancellation::{Cancellable, CancellationToken};
pub use config::ConfluenceConfig;
pub use errors::{ConfluenceError, ConfluenceResult};
pub use models::{
    Connection, FusedModel, ImprovementCycle, IntegrationLevel, MergeResult, MergeState,
    Opportunity, OpportunityKind, PerformanceSnapshot, Subsystem, TimeWindow,
};
