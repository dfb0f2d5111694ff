use thiserror::Error as ThisError;

/// Failures raised by a [`Store`](crate::store::Store) implementation during
/// a single call. The pollers never retry these; "not found" is expressed
/// through the return value, not through an error.
#[derive(Debug, ThisError)]
pub enum StoreError {
    /// The store understood the request and refused it (malformed key
    /// expression, missing table, permission denied).
    #[error("Store rejected the request: {message}")]
    Rejected { message: String },

    /// The request never completed (connection, DNS, I/O timeout).
    #[error("Store transport failure: {message}")]
    Transport { message: String },

    #[error("Malformed page token: {0}")]
    BadPageToken(String),

    #[error("Store error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}
