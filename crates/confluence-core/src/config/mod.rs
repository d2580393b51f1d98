//! Configuration: one struct per subsystem, aggregated by [`ConfluenceConfig`].

mod confluence_config;
pub mod defaults;
mod fusion_config;
mod improvement_config;
mod observability_config;
mod scheduler_config;

pub use confluence_config::ConfluenceConfig;
pub use fusion_config::FusionConfig;
pub use improvement_config::ImprovementConfig;
pub use observability_config::ObservabilityConfig;
pub use scheduler_config::SchedulerConfig;
