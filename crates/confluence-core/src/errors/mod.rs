//! Error handling for Confluence.
//! One error enum per subsystem, `thiserror` only.

mod config_error;
mod confluence_error;
mod improvement_error;
mod orchestration_error;
mod scheduling_error;

pub use config_error::ConfigError;
pub use confluence_error::{ConfluenceError, ConfluenceResult};
pub use improvement_error::ImprovementError;
pub use orchestration_error::OrchestrationError;
pub use scheduling_error::SchedulingError;
