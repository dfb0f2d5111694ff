use chrono::Utc;
use oauth2::basic::{BasicTokenResponse, BasicTokenType};
use oauth2::{ResourceOwnerPassword, ResourceOwnerUsername, Scope, TokenResponse};
use tracing::info;

use super::client::build_grant_client;
use super::{AccessToken, TokenConfig};
use crate::error::{StakeoutError, TokenError};

/// Obtain an access token via the client-credentials grant.
pub async fn client_credentials_token(
    http_client: &reqwest::Client,
    cfg: &TokenConfig,
) -> Result<AccessToken, StakeoutError> {
    let client = build_grant_client(cfg);

    let mut request = client.exchange_client_credentials();
    for scope in &cfg.scopes {
        request = request.add_scope(Scope::new(scope.clone()));
    }
    if let Some(audience) = &cfg.audience {
        request = request.add_extra_param("audience", audience.clone());
    }

    let response = request
        .request_async(http_client)
        .await
        .map_err(TokenError::from)?;

    info!(token_url = %cfg.token_url, "client-credentials token acquired");
    Ok(into_access_token(&response))
}

/// Obtain an access token via the resource-owner-password grant.
pub async fn password_token(
    http_client: &reqwest::Client,
    cfg: &TokenConfig,
    username: &str,
    password: &str,
) -> Result<AccessToken, StakeoutError> {
    let client = build_grant_client(cfg);
    let username = ResourceOwnerUsername::new(username.to_string());
    let password = ResourceOwnerPassword::new(password.to_string());

    let mut request = client.exchange_password(&username, &password);
    for scope in &cfg.scopes {
        request = request.add_scope(Scope::new(scope.clone()));
    }
    if let Some(audience) = &cfg.audience {
        request = request.add_extra_param("audience", audience.clone());
    }

    let response = request
        .request_async(http_client)
        .await
        .map_err(TokenError::from)?;

    info!(token_url = %cfg.token_url, "password-grant token acquired");
    Ok(into_access_token(&response))
}

fn into_access_token(response: &BasicTokenResponse) -> AccessToken {
    let expires_in = response.expires_in().map(|d| d.as_secs());
    let expires_at =
        expires_in.map(|secs| Utc::now() + chrono::Duration::seconds(secs.min(i64::MAX as u64) as i64));

    let token_type = match response.token_type() {
        BasicTokenType::Bearer => "Bearer".to_string(),
        BasicTokenType::Mac => "MAC".to_string(),
        BasicTokenType::Extension(name) => name.clone(),
        other => format!("{other:?}"),
    };

    AccessToken {
        secret: response.access_token().secret().clone(),
        token_type,
        expires_in,
        expires_at,
    }
}
