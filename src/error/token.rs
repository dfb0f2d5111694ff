use oauth2::basic::BasicErrorResponseType;
use oauth2::reqwest::Error as ReqwestClientError;
use oauth2::{HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error as ThisError;

const ERROR_BODY_PREVIEW_CHARS: usize = 120;

#[derive(Debug, ThisError)]
pub enum TokenError {
    /// The token endpoint answered with a standard OAuth error payload
    /// (`invalid_client`, `invalid_grant`, ...).
    #[error("Token endpoint refused the grant: {error}")]
    ServerResponse { error: String },

    #[error("Token request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token endpoint parse error: {message}. Body: {body}")]
    Parse { message: String, body: String },

    #[error("Token acquisition failed: {message}")]
    Other { message: String },
}

type GrantRequestError = RequestTokenError<
    HttpClientError<ReqwestClientError>,
    StandardErrorResponse<BasicErrorResponseType>,
>;

impl From<GrantRequestError> for TokenError {
    fn from(e: GrantRequestError) -> Self {
        match e {
            RequestTokenError::ServerResponse(err) => TokenError::ServerResponse {
                error: err.error().to_string(),
            },
            RequestTokenError::Request(wrapper) => match wrapper {
                HttpClientError::Reqwest(real_err) => TokenError::Request(*real_err),
                other => TokenError::Other {
                    message: format!("HttpClientError: {other:?}"),
                },
            },
            RequestTokenError::Parse(parse_err, body) => {
                let body_str = String::from_utf8_lossy(&body);
                let preview: String = body_str.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
                let body = if body_str.chars().count() > ERROR_BODY_PREVIEW_CHARS {
                    format!("{preview}...<truncated>")
                } else {
                    preview
                };
                TokenError::Parse {
                    message: parse_err.to_string(),
                    body,
                }
            }
            RequestTokenError::Other(s) => TokenError::Other { message: s },
        }
    }
}
