use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// A stored record: attribute names mapped to scalar, boolean, numeric or
/// nested-object values.
pub type Record = serde_json::Map<String, Value>;

/// Opaque continuation cursor returned by a paged query.
///
/// Callers hand it back unchanged to resume where the previous page stopped.
/// Only store implementations look inside, via [`PageToken::decode`]; the
/// pollers never interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// Wrap a token received verbatim from the outside world.
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode a store-native resume position into an opaque token.
    pub fn encode(position: &Value) -> Result<Self, StoreError> {
        let bytes =
            serde_json::to_vec(position).map_err(|e| StoreError::BadPageToken(e.to_string()))?;
        Ok(Self(URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Recover the store-native resume position from the token.
    pub fn decode(&self) -> Result<Value, StoreError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(&self.0)
            .map_err(|e| StoreError::BadPageToken(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::BadPageToken(e.to_string()))
    }
}
