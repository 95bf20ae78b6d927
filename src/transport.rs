//! Shared HTTP transport construction.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Build the middleware HTTP client shared by the REST clients.
///
/// The transport carries the default headers and the tracing middleware.
/// Per-request authentication headers are attached by the calling client,
/// so one transport configuration serves both the unauthenticated login
/// flow and the authenticated endpoint groups.
pub(crate) fn build_http_client(user_agent: Option<String>) -> ClientWithMiddleware {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("upstox-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("upstox-api-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build()
}
