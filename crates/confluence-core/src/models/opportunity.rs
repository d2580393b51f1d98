use serde::{Deserialize, Serialize};

/// Closed set of opportunity kinds. `Other` is the fallback arm for kinds
/// reported by detectors outside the built-in five.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    CodeOptimization,
    ArchitectureOptimization,
    AlgorithmOptimization,
    PerformanceOptimization,
    SecurityEnhancement,
    Other(String),
}

impl OpportunityKind {
    /// Map a type string onto a kind; unknown strings become `Other`.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "code_optimization" => Self::CodeOptimization,
            "architecture_optimization" => Self::ArchitectureOptimization,
            "algorithm_optimization" => Self::AlgorithmOptimization,
            "performance_optimization" => Self::PerformanceOptimization,
            "security_enhancement" => Self::SecurityEnhancement,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CodeOptimization => "code_optimization",
            Self::ArchitectureOptimization => "architecture_optimization",
            Self::AlgorithmOptimization => "algorithm_optimization",
            Self::PerformanceOptimization => "performance_optimization",
            Self::SecurityEnhancement => "security_enhancement",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected improvement opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub description: String,
    pub kind: OpportunityKind,
    /// Expected benefit, unbounded above, must be non-negative.
    pub impact: f64,
    /// Expected cost, must be positive.
    pub effort: f64,
    /// Component the opportunity applies to.
    pub component: String,
}

impl Opportunity {
    pub fn new(
        kind: OpportunityKind,
        component: impl Into<String>,
        description: impl Into<String>,
        impact: f64,
        effort: f64,
    ) -> Self {
        Self {
            description: description.into(),
            kind,
            impact,
            effort,
            component: component.into(),
        }
    }

    /// Ranking key: impact per unit of effort.
    pub fn priority(&self) -> f64 {
        self.impact / self.effort
    }
}

/// An opportunity removed before generation, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedOpportunity {
    pub opportunity: Opportunity,
    pub reason: String,
}
