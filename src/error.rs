//! Error types for the Upstox client library.

use thiserror::Error;

/// The main error type for all Upstox client operations.
#[derive(Error, Debug)]
pub enum UpstoxError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// WebSocket protocol error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// WebSocket communication error (with message)
    #[error("WebSocket error: {0}")]
    WebSocketMsg(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Upstox API returned an error envelope
    #[error("Upstox API error: {0}")]
    Api(ApiErrorBody),

    /// Non-2xx response whose body was not a decodable error envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// An authenticated operation was attempted before a token was obtained
    #[error("Not authenticated: complete the login flow to obtain an access token")]
    NotAuthenticated,

    /// A required field was absent or blank at construction time
    #[error("Validation error: {0}")]
    Validation(String),
}

impl UpstoxError {
    /// True when the failure happened at the transport level (connection
    /// refused/reset, timeout), as opposed to an HTTP-level or decode error.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            UpstoxError::Http(_) | UpstoxError::HttpMiddleware(_) | UpstoxError::WebSocket(_)
        )
    }

    /// True when the server answered with a non-2xx response.
    pub fn is_api(&self) -> bool {
        matches!(self, UpstoxError::Api(_) | UpstoxError::UnexpectedStatus { .. })
    }
}

/// Classify a non-2xx response: a decodable Upstox error envelope becomes
/// [`UpstoxError::Api`], anything else [`UpstoxError::UnexpectedStatus`].
pub(crate) fn http_failure(status: reqwest::StatusCode, body: String) -> UpstoxError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(envelope) => UpstoxError::Api(envelope),
        Err(_) => UpstoxError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}

/// Error envelope returned by the Upstox API on non-2xx responses.
///
/// The body has the shape
/// `{code, status, timestamp, message, error: {name, reason}}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Status phrase (e.g. "Bad Request").
    pub status: String,
    /// Server-side timestamp of the failure.
    #[serde(default)]
    pub timestamp: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Structured error detail.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// The `error` object nested inside an [`ApiErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorDetail {
    /// Error class name.
    pub name: String,
    /// Reason for the failure.
    pub reason: String,
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.code, self.status, self.message)?;
        if let Some(detail) = &self.error {
            write!(f, " ({}: {})", detail.name, detail.reason)?;
        }
        Ok(())
    }
}
