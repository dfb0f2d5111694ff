mod key;
mod query;
mod types;

pub use key::Key;
pub use query::{QueryPage, QueryRequest, QuerySpec, SortOrder};
pub use types::{PageToken, Record};

use async_trait::async_trait;

use crate::error::StoreError;

/// Backing-store driver, injected explicitly into every helper call.
///
/// Implementations wrap whatever persistence service the workflow under test
/// writes to. Each method is one bounded request; it carries its own I/O
/// timeout and reports any transport or validation failure as [`StoreError`].
/// The pollers treat those failures as fatal to the current call, not as
/// something to poll through.
#[async_trait]
pub trait Store: Send + Sync {
    /// Point lookup. `Ok(None)` means the key is simply not there yet.
    async fn get_item(&self, table: &str, key: &Key) -> Result<Option<Record>, StoreError>;

    /// Run one page of an index/range query.
    async fn query(&self, request: &QueryRequest) -> Result<QueryPage, StoreError>;

    /// Unconditional single-record write.
    async fn put_item(&self, table: &str, record: &Record) -> Result<(), StoreError>;
}
