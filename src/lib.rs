pub mod config;
pub mod error;
pub mod fixture;
pub mod http;
pub mod poll;
pub mod store;
pub mod token;
pub mod util;

pub use error::{StakeoutError, StoreError, TokenError};
pub use poll::{RetryPolicy, get_item, query};
pub use store::{Key, PageToken, QueryPage, QueryRequest, QuerySpec, Record, SortOrder, Store};
pub use token::{AccessToken, TokenConfig};
