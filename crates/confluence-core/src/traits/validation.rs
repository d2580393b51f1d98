use crate::errors::ConfluenceResult;
use crate::models::{Improvement, ValidationVerdict};

/// External test/validation harness.
pub trait IValidationHarness: Send + Sync {
    /// Run the candidate's validation requirements. A rejection is a normal
    /// verdict; `Err` means the harness itself failed.
    fn validate(&self, candidate: &Improvement) -> ConfluenceResult<ValidationVerdict>;
}
