use serde_json::json;
use stakeout::error::TokenError;
use stakeout::token::{TokenConfig, client_credentials_token, password_token};
use stakeout::StakeoutError;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_config(server: &MockServer) -> TokenConfig {
    TokenConfig {
        token_url: Url::parse(&format!("{}/oauth/token", server.uri())).unwrap(),
        client_id: "harness-client".to_string(),
        client_secret: Some("harness-secret".to_string()),
        scopes: vec!["workflows.read".to_string()],
        audience: None,
    }
}

fn http_client() -> reqwest::Client {
    // oauth2 requires redirects off so tokens cannot leak across hosts.
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn client_credentials_grant_yields_a_stamped_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("scope=workflows.read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-abc",
            "token_type": "bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_credentials_token(&http_client(), &token_config(&server))
        .await
        .unwrap();

    assert_eq!(token.secret, "token-abc");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, Some(3600));
    assert!(token.expires_at.is_some());
    assert!(!token.is_expired());
}

#[tokio::test]
async fn password_grant_sends_the_resource_owner_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=it-runner"))
        .and(body_string_contains("password=pw-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-xyz",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = password_token(&http_client(), &token_config(&server), "it-runner", "pw-123")
        .await
        .unwrap();

    assert_eq!(token.secret, "token-xyz");
    assert_eq!(token.expires_in, None);
    assert!(!token.is_expired());
}

#[tokio::test]
async fn audience_parameter_reaches_the_token_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("audience=https%3A%2F%2Fapi.example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-aud",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = token_config(&server);
    cfg.audience = Some("https://api.example.com".to_string());

    let token = client_credentials_token(&http_client(), &cfg).await.unwrap();
    assert_eq!(token.secret, "token-aud");
}

#[tokio::test]
async fn refused_grant_surfaces_the_server_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client"
        })))
        .mount(&server)
        .await;

    let err = client_credentials_token(&http_client(), &token_config(&server))
        .await
        .unwrap_err();

    match err {
        StakeoutError::Token(TokenError::ServerResponse { error }) => {
            assert_eq!(error, "invalid_client");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
