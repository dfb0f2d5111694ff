use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenUrl};

use super::TokenConfig;

/// A basic OAuth2 client with only the token endpoint configured, which is
/// all the two supported grants need. Kept at the module boundary so the
/// grant functions stay free of oauth2 typestate plumbing.
pub(crate) type GrantClient = BasicClient<
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub(crate) fn build_grant_client(cfg: &TokenConfig) -> GrantClient {
    let mut client = BasicClient::new(ClientId::new(cfg.client_id.clone()));

    if let Some(secret) = &cfg.client_secret {
        client = client.set_client_secret(ClientSecret::new(secret.clone()));
    }

    client.set_token_uri(TokenUrl::from_url(cfg.token_url.clone()))
}
