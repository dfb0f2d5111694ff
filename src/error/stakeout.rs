use thiserror::Error as ThisError;

use super::store::StoreError;
use super::token::TokenError;

#[derive(Debug, ThisError)]
pub enum StakeoutError {
    /// Malformed input to a helper itself. Surfaced before the first store
    /// call, never retried.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Failure raised by the backing store during an attempt. Surfaced
    /// immediately; the pollers do not treat store errors as transient.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The single-record poller exhausted its attempt budget without the
    /// record ever showing up.
    #[error("Record in table '{table}' never appeared after {attempts} attempts")]
    ItemNeverAppeared { table: String, attempts: u32 },

    /// The collection poller exhausted its attempt budget without a
    /// non-empty page or continuation token.
    #[error("Query against table '{table}' matched nothing after {attempts} attempts")]
    QueryNeverMatched { table: String, attempts: u32 },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
