//! The authenticated REST client and its shared request helpers.

use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

use crate::auth::Session;
use crate::endpoints;
use crate::error::{self, UpstoxError};
use crate::transport;
use crate::types::ApiResponse;

/// Client for the authenticated `/live` endpoint groups.
///
/// Preparation derives the authentication headers from the session's
/// current token and credentials; every request issued afterwards carries
/// that header pair. Preparing a client from an unauthenticated session
/// fails with [`UpstoxError::NotAuthenticated`]. Re-deriving a client after
/// a fresh login is cheap and picks up the new token.
#[derive(Clone)]
pub struct LiveClient {
    http: ClientWithMiddleware,
    base_url: String,
    auth: HeaderMap,
}

impl LiveClient {
    /// Prepare a client from an authenticated session with default settings.
    pub fn new(session: &Session) -> Result<Self, UpstoxError> {
        Self::builder().build(session)
    }

    /// Create a new client builder.
    pub fn builder() -> LiveClientBuilder {
        LiveClientBuilder::new()
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .headers(self.auth.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(&self, path: &str, params: &Q) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| UpstoxError::Validation(format!("failed to encode query: {e}")))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query_string)
        };
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .headers(self.auth.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .headers(self.auth.clone())
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make an authenticated PUT request with a JSON body.
    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT");
        let response = self
            .http
            .put(&url)
            .headers(self.auth.clone())
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete<T>(&self, path: &str) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .headers(self.auth.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Upstox API, unwrapping the envelope.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, UpstoxError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error::http_failure(status, body));
        }

        let parsed: ApiResponse<T> = serde_json::from_str(&body)?;
        Ok(parsed.data)
    }
}

impl std::fmt::Debug for LiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`LiveClient`].
pub struct LiveClientBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl LiveClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: endpoints::UPSTOX_BASE_URL.to_string(),
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Prepare the client from the session's current token and credentials.
    ///
    /// Fails with [`UpstoxError::NotAuthenticated`] when the session has no
    /// access token yet.
    pub fn build(self, session: &Session) -> Result<LiveClient, UpstoxError> {
        debug!("preparing live API client");
        let auth = session.auth_headers()?.to_header_map()?;

        Ok(LiveClient {
            http: transport::build_http_client(self.user_agent),
            base_url: self.base_url,
            auth,
        })
    }
}

impl Default for LiveClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, ApiCredentials};
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_build_fails_without_token() {
        let session = Session::new(ApiCredentials::new("key", "secret").unwrap());
        assert!(matches!(
            LiveClient::new(&session),
            Err(UpstoxError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_build_captures_headers_at_preparation_time() {
        let session = Session::new(ApiCredentials::new("key", "secret").unwrap());
        session.authenticate(AccessToken::new("first", "Bearer", 86400));

        let client = LiveClient::new(&session).unwrap();
        assert_eq!(client.auth.get(AUTHORIZATION).unwrap(), "Bearer first");

        // A token swap is picked up by the next preparation, not by clients
        // already prepared.
        session.authenticate(AccessToken::new("second", "Bearer", 86400));
        assert_eq!(client.auth.get(AUTHORIZATION).unwrap(), "Bearer first");
        let fresh = LiveClient::new(&session).unwrap();
        assert_eq!(fresh.auth.get(AUTHORIZATION).unwrap(), "Bearer second");
    }
}
