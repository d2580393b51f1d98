//! The single cancellable suspension point.
//!
//! Both the merge orchestrator's wait-for-window and the improvement loop's
//! inter-cycle wait go through [`suspend_for`], so cancellation is observed
//! promptly instead of after the full sleep.

use std::time::Duration;

use tracing::trace;

use confluence_core::cancellation::{Cancellable, CancellationToken};
use confluence_core::errors::{ConfluenceError, ConfluenceResult};

/// Sleep for `duration` unless `token` fires first.
///
/// Returns `Err(Cancelled)` if the token is already cancelled or becomes
/// cancelled during the wait. A zero duration still checks the token.
pub async fn suspend_for(duration: Duration, token: &CancellationToken) -> ConfluenceResult<()> {
    if token.is_cancelled() {
        return Err(ConfluenceError::Cancelled);
    }
    if duration.is_zero() {
        return Ok(());
    }

    trace!(wait_secs = duration.as_secs_f64(), "suspending");
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ConfluenceError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}
