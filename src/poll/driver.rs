use std::future::Future;

use tracing::debug;

use super::policy::RetryPolicy;
use crate::error::StoreError;

/// Outcome of a full poll loop: the value that satisfied the predicate, or
/// `Exhausted` once the attempt budget ran out.
pub(crate) enum PollOutcome<T> {
    Ready(T),
    Exhausted,
}

/// Drive `attempt` under `policy` until `ready` accepts a result.
///
/// Attempts run strictly one after another, starting at iteration 1. A store
/// error aborts the loop at once; it is not treated as transient. Every
/// attempt whose result fails the predicate is followed by one pause,
/// including the final one, after which the loop reports exhaustion without
/// issuing another attempt.
pub(crate) async fn poll<T, F, Fut, P>(
    policy: &RetryPolicy,
    mut attempt: F,
    mut ready: P,
) -> Result<PollOutcome<T>, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
    P: FnMut(&T) -> bool,
{
    for iteration in 1..=policy.max_attempts {
        let value = attempt().await?;
        if ready(&value) {
            return Ok(PollOutcome::Ready(value));
        }

        debug!(
            iteration,
            max_attempts = policy.max_attempts,
            pause = ?policy.pause,
            "target not present yet, pausing before next poll"
        );
        tokio::time::sleep(policy.pause).await;
    }

    Ok(PollOutcome::Exhausted)
}
