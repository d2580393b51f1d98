//! Flat report records for an external presentation layer.
//!
//! Both records are plain serde structs and are exported as TypeScript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use confluence_core::models::{ImprovementCycle, MergeResult};

/// One completed merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MergeReport {
    pub merged_at: DateTime<Utc>,
    pub window_opens_at: DateTime<Utc>,
    pub convergence_score: f64,
    pub intensity: f64,
    pub subsystems: Vec<String>,
    pub capabilities_count: u32,
    pub connections: u32,
    pub mean_compatibility: f64,
    pub network_density: f64,
    pub integration_level: String,
    pub performance_gain: f64,
}

impl From<&MergeResult> for MergeReport {
    fn from(result: &MergeResult) -> Self {
        Self {
            merged_at: result.merged_at,
            window_opens_at: result.window.timestamp,
            convergence_score: result.window.convergence_score,
            intensity: result.intensity,
            subsystems: result.fused.subsystem_ids.clone(),
            capabilities_count: result.capabilities_count as u32,
            connections: result.fused.total_connections() as u32,
            mean_compatibility: result.fused.mean_compatibility,
            network_density: result.fused.network_density,
            integration_level: result.fused.integration_level.as_str().to_string(),
            performance_gain: result.performance_gain,
        }
    }
}

/// One finished improvement cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CycleReport {
    pub cycle_number: u32,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub opportunities: u32,
    pub dropped: u32,
    pub applied: u32,
    pub rejected: u32,
    pub acceptance_rate: f64,
    pub next_wait_secs: f64,
    pub applied_ids: Vec<String>,
}

impl From<&ImprovementCycle> for CycleReport {
    fn from(cycle: &ImprovementCycle) -> Self {
        Self {
            cycle_number: cycle.cycle_number as u32,
            started_at: cycle.started_at,
            completed_at: cycle.completed_at,
            opportunities: cycle.opportunities.len() as u32,
            dropped: cycle.dropped.len() as u32,
            applied: cycle.applied_improvements.len() as u32,
            rejected: cycle.rejected.len() as u32,
            acceptance_rate: cycle.acceptance_rate(),
            next_wait_secs: cycle.next_wait.as_secs_f64(),
            applied_ids: cycle
                .applied_improvements
                .iter()
                .map(|i| i.id.clone())
                .collect(),
        }
    }
}
