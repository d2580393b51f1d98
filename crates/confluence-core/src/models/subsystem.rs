use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Raw output of the external repository-analysis collaborator.
///
/// Opaque to everything except the capability extractor, which reads the
/// `file_structure`, `code_patterns`, `architecture`, `dependencies`, and
/// `integration_points` keys.
pub type RawAnalysis = serde_json::Map<String, serde_json::Value>;

/// Structural summary of a subsystem's architecture, used by pair scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureSummary {
    /// Dominant architectural style (e.g. "microservices", "event_driven").
    pub style: Option<String>,
    /// Number of top-level components.
    pub component_count: usize,
    /// Implementation languages.
    pub languages: BTreeSet<String>,
    /// Exposed interface protocols (e.g. "rest", "grpc").
    pub interfaces: BTreeSet<String>,
}

/// One integrated subsystem. Owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subsystem {
    pub id: String,
    pub raw_analysis: RawAnalysis,
    /// Normalized `<facet>_<value>` capability tags.
    pub capability_set: BTreeSet<String>,
    pub architecture_summary: ArchitectureSummary,
}

impl Subsystem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capability_set = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_analysis(mut self, raw_analysis: RawAnalysis) -> Self {
        self.raw_analysis = raw_analysis;
        self
    }

    pub fn with_architecture(mut self, summary: ArchitectureSummary) -> Self {
        self.architecture_summary = summary;
        self
    }
}
