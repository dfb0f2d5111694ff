use tracing::warn;

use super::driver::{self, PollOutcome};
use crate::error::StakeoutError;
use crate::store::{QueryPage, QuerySpec, Store};

/// Resolve `spec` to a page of records, polling until the page is non-empty
/// or the store reports a continuation token.
///
/// An empty page that carries a token counts as success: the store has more
/// to offer even though the current page matched nothing. This deliberately
/// differs from [`get_item`](super::get_item), which insists on the record
/// itself. When the policy budget runs out the call fails with
/// [`StakeoutError::QueryNeverMatched`].
pub async fn query<S>(store: &S, spec: &QuerySpec) -> Result<QueryPage, StakeoutError>
where
    S: Store + ?Sized,
{
    spec.validate()?;
    let policy = spec.policy.unwrap_or_default();
    policy.validate()?;

    let request = spec.lower();
    let outcome = driver::poll(&policy, || store.query(&request), QueryPage::has_results).await?;

    match outcome {
        PollOutcome::Ready(page) => Ok(page),
        PollOutcome::Exhausted => {
            warn!(
                table = %spec.table,
                attempts = policy.max_attempts,
                "query matched nothing, giving up"
            );
            Err(StakeoutError::QueryNeverMatched {
                table: spec.table.clone(),
                attempts: policy.max_attempts,
            })
        }
    }
}
