use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::poll::RetryPolicy;
use crate::token::TokenConfig;

/// Harness configuration managed by Figment.
///
/// The helpers never read the environment or any global state themselves:
/// the harness loads this once and hands the resolved pieces (retry policy,
/// HTTP timeout, token settings) into each call explicitly.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Poll-loop defaults (see `poll` table in stakeout.toml).
    #[serde(default)]
    pub poll: PollConfig,

    /// Outbound HTTP settings (see `http` table in stakeout.toml).
    #[serde(default)]
    pub http: HttpConfig,

    /// Token-endpoint settings (see `oauth` table in stakeout.toml).
    #[serde(default)]
    pub oauth: OauthConfig,
}

const DEFAULT_CONFIG_FILE: &str = "stakeout.toml";

impl Config {
    /// Builds a Figment that merges defaults and a config TOML file.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `stakeout.toml` if present.
    pub fn from_optional_toml() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional stakeout.toml): {err}")
        })
    }

    /// The poll policy both pollers fall back to.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.poll.max_attempts,
            Duration::from_secs(self.poll.pause_secs),
        )
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Token settings, present only when a token endpoint and client id are
    /// configured.
    pub fn token_config(&self) -> Option<TokenConfig> {
        let token_url = self.oauth.token_url.clone()?;
        if self.oauth.client_id.trim().is_empty() {
            return None;
        }
        Some(TokenConfig {
            token_url,
            client_id: self.oauth.client_id.clone(),
            client_secret: self.oauth.client_secret.clone(),
            scopes: self.oauth.scopes.clone(),
            audience: self.oauth.audience.clone(),
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// TOML: `poll.max_attempts`. Default: `10`.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// TOML: `poll.pause_secs`. Default: `2`.
    #[serde(default = "default_pause_secs")]
    pub pause_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            pause_secs: default_pause_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// TOML: `http.timeout_secs`. Default: `30`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OauthConfig {
    /// TOML: `oauth.token_url`. No default; token helpers stay unavailable
    /// until this is set.
    #[serde(default)]
    pub token_url: Option<Url>,

    /// TOML: `oauth.client_id`.
    #[serde(default)]
    pub client_id: String,

    /// TOML: `oauth.client_secret`.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// TOML: `oauth.scopes`.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// TOML: `oauth.audience`.
    #[serde(default)]
    pub audience: Option<String>,
}

fn default_max_attempts() -> u32 {
    10
}

fn default_pause_secs() -> u64 {
    2
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_poller_contract() {
        let cfg = Config::default();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.pause, Duration::from_secs(2));
        assert_eq!(cfg.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn token_config_requires_url_and_client_id() {
        let mut cfg = Config::default();
        assert!(cfg.token_config().is_none());

        cfg.oauth.token_url = Some(Url::parse("https://auth.example.com/token").unwrap());
        assert!(cfg.token_config().is_none());

        cfg.oauth.client_id = "harness".to_string();
        let token_cfg = cfg.token_config().unwrap();
        assert_eq!(token_cfg.client_id, "harness");
        assert!(token_cfg.scopes.is_empty());
    }
}
