use tracing::warn;

use super::driver::{self, PollOutcome};
use super::policy::RetryPolicy;
use crate::error::StakeoutError;
use crate::store::{Key, Record, Store};

/// Resolve `key` in `table`, polling until the record is present.
///
/// Presence alone satisfies the poll; attribute values are not inspected.
/// Store failures surface immediately and are never retried. When the policy
/// budget runs out the call fails with [`StakeoutError::ItemNeverAppeared`],
/// distinguishing "never appeared" from "store broke".
pub async fn get_item<S>(
    store: &S,
    table: &str,
    key: &Key,
    policy: RetryPolicy,
) -> Result<Record, StakeoutError>
where
    S: Store + ?Sized,
{
    policy.validate()?;
    key.validate()?;

    let outcome = driver::poll(&policy, || store.get_item(table, key), Option::is_some).await?;

    match outcome {
        PollOutcome::Ready(Some(record)) => Ok(record),
        PollOutcome::Ready(None) | PollOutcome::Exhausted => {
            warn!(
                table,
                attempts = policy.max_attempts,
                "record never appeared, giving up"
            );
            Err(StakeoutError::ItemNeverAppeared {
                table: table.to_string(),
                attempts: policy.max_attempts,
            })
        }
    }
}
