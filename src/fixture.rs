use tracing::debug;

use crate::error::StakeoutError;
use crate::store::{Record, Store};

/// Write one fixture record, returning it for further use in the test.
///
/// The record must carry at least one attribute and reaches the store
/// verbatim; nothing is stamped on implicitly. Callers wanting
/// collision-free keys build them with [`unique_id`](crate::util::unique_id).
pub async fn write_record<S>(
    store: &S,
    table: &str,
    record: Record,
) -> Result<Record, StakeoutError>
where
    S: Store + ?Sized,
{
    if table.trim().is_empty() {
        return Err(StakeoutError::Validation(
            "fixture table identifier must be non-empty".to_string(),
        ));
    }
    if record.is_empty() {
        return Err(StakeoutError::Validation(
            "fixture record must carry at least one attribute".to_string(),
        ));
    }

    store.put_item(table, &record).await?;
    debug!(table, attributes = record.len(), "fixture record written");
    Ok(record)
}

/// Write a batch of fixture records one by one, stopping at the first
/// failure. Order is preserved; there is no partial-failure recovery.
pub async fn write_records<S>(
    store: &S,
    table: &str,
    records: Vec<Record>,
) -> Result<Vec<Record>, StakeoutError>
where
    S: Store + ?Sized,
{
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        written.push(write_record(store, table, record).await?);
    }
    Ok(written)
}
