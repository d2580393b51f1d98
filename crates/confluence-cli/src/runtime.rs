//! File-backed probe, checklist harness and logging deployer.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};

use confluence_core::errors::{ConfluenceResult, ImprovementError};
use confluence_core::models::{
    DeploymentAck, Improvement, PerformanceSnapshot, Subsystem, ValidationVerdict,
};
use confluence_core::traits::{IDeployer, IPerformanceProbe, IValidationHarness};
use confluence_fusion::CapabilityExtractor;

/// Read subsystem analyses from JSON files.
///
/// A missing `id` falls back to the file stem. Capabilities and the
/// architecture summary are extracted from `raw_analysis` when the file
/// does not carry them.
pub fn load_subsystems(paths: &[PathBuf]) -> anyhow::Result<Vec<Subsystem>> {
    let extractor = CapabilityExtractor::new();
    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading subsystem {}", path.display()))?;
            let mut subsystem: Subsystem = serde_json::from_str(&text)
                .with_context(|| format!("parsing subsystem {}", path.display()))?;
            if subsystem.id.is_empty() {
                subsystem.id = file_stem(path);
            }
            if subsystem.capability_set.is_empty() {
                extractor.populate(&mut subsystem);
            }
            info!(
                id = %subsystem.id,
                capabilities = subsystem.capability_set.len(),
                "subsystem loaded"
            );
            Ok(subsystem)
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Re-reads a snapshot file at every cycle, so an external collector can
/// keep it current. `taken_at` is stamped at read time.
#[derive(Debug, Clone)]
pub struct SnapshotFileProbe {
    path: PathBuf,
}

impl SnapshotFileProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn failed(&self, reason: impl std::fmt::Display) -> ImprovementError {
        ImprovementError::ProbeFailed {
            reason: format!("{}: {reason}", self.path.display()),
        }
    }
}

impl IPerformanceProbe for SnapshotFileProbe {
    fn snapshot(&self) -> ConfluenceResult<PerformanceSnapshot> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.failed(e))?;
        let mut snapshot: PerformanceSnapshot =
            serde_json::from_str(&text).map_err(|e| self.failed(e))?;
        snapshot.taken_at = Utc::now();
        Ok(snapshot)
    }
}

/// Checks this harness can run. Every requirement the generators emit.
pub const KNOWN_CHECKS: [&str; 12] = [
    "unit_tests",
    "integration_tests",
    "property_tests",
    "lint",
    "code_review",
    "architecture_review",
    "dependency_audit",
    "benchmarks",
    "load_test",
    "regression_check",
    "security_scan",
    "smoke_test",
];

/// Accepts a candidate when every validation requirement it lists is a
/// check this harness has available.
#[derive(Debug, Clone)]
pub struct ChecklistHarness {
    available: BTreeSet<String>,
}

impl ChecklistHarness {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for ChecklistHarness {
    fn default() -> Self {
        Self::new(KNOWN_CHECKS)
    }
}

impl IValidationHarness for ChecklistHarness {
    fn validate(&self, candidate: &Improvement) -> ConfluenceResult<ValidationVerdict> {
        let missing: Vec<&str> = candidate
            .validation_requirements
            .iter()
            .filter(|r| !self.available.contains(r.as_str()))
            .map(String::as_str)
            .collect();
        if missing.is_empty() {
            Ok(ValidationVerdict::accept(format!(
                "passed {}",
                candidate.validation_requirements.join(", ")
            )))
        } else {
            warn!(candidate_id = %candidate.id, missing = ?missing, "validation checks unavailable");
            Ok(ValidationVerdict::reject(format!("missing checks: {}", missing.join(", "))))
        }
    }
}

/// Logs the plan and acknowledges. Deployment mechanics live elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDeployer;

impl IDeployer for LoggingDeployer {
    fn deploy(&self, candidate: &Improvement) -> ConfluenceResult<DeploymentAck> {
        info!(
            candidate_id = %candidate.id,
            kind = %candidate.kind,
            component = %candidate.component,
            plan = %candidate.plan,
            "deploying improvement"
        );
        Ok(DeploymentAck {
            candidate_id: candidate.id.clone(),
            deployed_at: Utc::now(),
        })
    }
}
