//! # confluence-cli
//!
//! Argument parsing and the concrete collaborators the `confluence` binary
//! plugs into the orchestrator and the improvement loop.

pub mod args;
pub mod runtime;

pub use args::{parse, CliArgs, Command};
pub use runtime::{load_subsystems, ChecklistHarness, LoggingDeployer, SnapshotFileProbe};
