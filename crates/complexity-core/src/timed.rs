//! Suspend-and-resume timed computation.
//!
//! The suspension is a tokio timer, not a thread sleep: while one
//! computation waits, the runtime keeps driving every other task. The
//! delay is a lower bound only.

use std::time::Duration;

use tracing::debug;

use crate::progress::CancellationToken;

/// Suspend for at least `delay`, then return `x²`.
///
/// Dropping the future before the delay elapses abandons it; nothing is
/// produced and nothing else happens.
///
/// # Example
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use std::time::Duration;
/// let sq = complexity_core::timed_square(4, Duration::from_millis(1)).await;
/// assert_eq!(sq, 16);
/// # });
/// ```
pub async fn timed_square(x: i64, delay: Duration) -> i128 {
    debug!(x, ?delay, "suspending");
    tokio::time::sleep(delay).await;
    debug!(x, "resumed");
    square(x)
}

/// Like [`timed_square`], but gives up when `cancel` fires first.
///
/// Returns `None` if the token is (or becomes) cancelled before the delay
/// elapses. Cancellation is an ordinary outcome, not an error.
pub async fn timed_square_cancellable(
    x: i64,
    delay: Duration,
    cancel: &CancellationToken,
) -> Option<i128> {
    if cancel.is_cancelled() {
        debug!(x, "cancelled before suspending");
        return None;
    }

    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!(x, "cancelled while suspended");
            None
        }
        sq = timed_square(x, delay) => Some(sq),
    }
}

fn square(x: i64) -> i128 {
    let x = i128::from(x);
    x * x
}
