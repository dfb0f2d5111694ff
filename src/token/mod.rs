mod client;
mod grants;

pub use grants::{client_credentials_token, password_token};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Settings for one token-endpoint exchange. Resolved once by the caller
/// (usually from [`Config`](crate::config::Config)); the grant helpers never
/// read the environment themselves.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    pub token_url: Url,
    pub client_id: String,
    pub client_secret: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Extra `audience` parameter some authorization servers require.
    pub audience: Option<String>,
}

/// An acquired access token, expiry stamped absolute at acquisition time.
///
/// `Debug` output redacts the secret so tokens can be logged safely.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub secret: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// True once current time is within 30 seconds of expiry (inclusive).
    /// Tokens without an expiry never report expired.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() + chrono::Duration::seconds(30) >= at,
            None => false,
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
