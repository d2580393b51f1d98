use crate::errors::ConfluenceResult;
use crate::models::PerformanceSnapshot;

/// Supplies the performance snapshot at the start of each improvement cycle.
pub trait IPerformanceProbe: Send + Sync {
    fn snapshot(&self) -> ConfluenceResult<PerformanceSnapshot>;
}
