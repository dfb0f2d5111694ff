use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::StakeoutError;

pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// One outbound HTTP request with a hard per-call timeout.
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Option<HeaderMap>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl CallRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: None,
            body: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url, body: Value) -> Self {
        let mut request = Self::new(Method::POST, url);
        request.body = Some(body);
        request
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Response surface: status and headers plus the raw body, with a typed JSON
/// accessor for the common case.
#[derive(Debug)]
pub struct CallResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl CallResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, StakeoutError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Issue one HTTP call. No retries and no status interpretation: the caller
/// gets whatever the server said, and transport or timeout failures surface
/// as the underlying reqwest error.
pub async fn call(
    client: &reqwest::Client,
    request: CallRequest,
) -> Result<CallResponse, StakeoutError> {
    let CallRequest {
        method,
        url,
        headers,
        body,
        timeout,
    } = request;

    debug!(%method, url = %url, timeout = ?timeout, "issuing HTTP call");

    let mut builder = client.request(method, url).timeout(timeout);
    if let Some(headers) = headers {
        builder = builder.headers(headers);
    }
    if let Some(body) = &body {
        builder = builder.json(body);
    }

    let response = builder.send().await.map_err(StakeoutError::Http)?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.map_err(StakeoutError::Http)?;

    Ok(CallResponse {
        status,
        headers,
        body,
    })
}
