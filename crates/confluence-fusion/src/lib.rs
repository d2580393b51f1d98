//! # confluence-fusion
//!
//! Merges descriptive data from several subsystems into one [`FusedModel`].
//!
//! - [`extractor`]: raw analysis → prefixed capability tags + architecture summary.
//! - [`scoring`]: the four pairwise scores that make up a connection.
//! - [`engine`]: all-pairs scoring, capability union, integration level.
//!
//! [`FusedModel`]: confluence_core::models::FusedModel

pub mod engine;
pub mod extractor;
pub mod scoring;

pub use engine::FusionEngine;
pub use extractor::CapabilityExtractor;
pub use scoring::PairScores;
