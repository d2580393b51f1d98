use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OpportunityKind;

/// A candidate improvement generated from one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub id: String,
    pub kind: OpportunityKind,
    pub component: String,
    /// The opportunity this candidate addresses.
    pub opportunity: String,
    /// Concrete change plan.
    pub plan: String,
    /// Expected improvement, carried over from the opportunity's impact.
    pub expected_improvement: f64,
    /// Checks the validation harness must run.
    pub validation_requirements: Vec<String>,
}

/// Answer from the validation harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub accepted: bool,
    pub reason: String,
}

impl ValidationVerdict {
    pub fn accept(reason: impl Into<String>) -> Self {
        Self {
            accepted: true,
            reason: reason.into(),
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason: reason.into(),
        }
    }
}

/// Acknowledgement from the deployment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentAck {
    pub candidate_id: String,
    pub deployed_at: DateTime<Utc>,
}

/// A candidate that was generated but not applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedImprovement {
    pub improvement: Improvement,
    pub reason: String,
}
