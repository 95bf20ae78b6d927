//! Client for the token endpoint.

use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::{AccessToken, ApiCredentials, Session, X_API_KEY};
use crate::endpoints;
use crate::error::{self, UpstoxError};
use crate::login::types::TokenResponse;
use crate::login::TokenRequest;
use crate::transport;

/// Build the browser authorization URL that produces the code consumed by
/// [`LoginClient::exchange_code`].
pub fn authorize_url(api_key: &str, redirect_uri: &str) -> Result<Url, UpstoxError> {
    let base = format!("{}{}", endpoints::UPSTOX_BASE_URL, endpoints::login::AUTHORIZE);
    let url = Url::parse_with_params(
        &base,
        &[
            ("apiKey", api_key),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
        ],
    )?;
    Ok(url)
}

/// Client for the OAuth2 code exchange.
///
/// The token endpoint is called before any bearer token exists, so this
/// client sends only the API key header; the key/secret pair rides in the
/// form body as `client_id`/`client_secret`.
pub struct LoginClient {
    http: ClientWithMiddleware,
    base_url: String,
}

impl LoginClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> LoginClientBuilder {
        LoginClientBuilder::new()
    }

    /// Exchange an authorization code for an access token.
    ///
    /// On a non-2xx response the decoded error envelope surfaces as
    /// [`UpstoxError::Api`]; transport failures surface with the underlying
    /// I/O error as the cause. No retries are performed and nothing is
    /// cached beyond the returned token.
    pub async fn exchange_code(
        &self,
        request: &TokenRequest,
        credentials: &ApiCredentials,
    ) -> Result<AccessToken, UpstoxError> {
        let url = format!("{}{}", self.base_url, endpoints::login::TOKEN);
        debug!(%url, "exchanging authorization code for access token");

        let form = TokenForm {
            code: &request.code,
            grant_type: &request.grant_type,
            redirect_uri: &request.redirect_uri,
            client_id: credentials.api_key(),
            client_secret: credentials.expose_secret(),
        };

        let response = self
            .http
            .post(&url)
            .header(X_API_KEY, credentials.api_key())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error::http_failure(status, body));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.into_access_token())
    }

    /// Run the code exchange with the session's credentials and store the
    /// resulting token in the session.
    pub async fn login(
        &self,
        session: &Session,
        request: &TokenRequest,
    ) -> Result<AccessToken, UpstoxError> {
        let token = self.exchange_code(request, session.credentials()).await?;
        session.authenticate(token.clone());
        Ok(token)
    }
}

impl Default for LoginClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoginClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Form body for the token endpoint.
#[derive(Serialize)]
struct TokenForm<'a> {
    code: &'a str,
    grant_type: &'a str,
    redirect_uri: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Builder for [`LoginClient`].
pub struct LoginClientBuilder {
    base_url: String,
    user_agent: Option<String>,
}

impl LoginClientBuilder {
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

    /// Build the client.
    pub fn build(self) -> LoginClient {
        LoginClient {
            http: transport::build_http_client(self.user_agent),
            base_url: self.base_url,
        }
    }
}

impl Default for LoginClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_carries_key_and_redirect() {
        let url = authorize_url("secretApiKey", "https://localhost:4567/callback").unwrap();
        assert_eq!(url.path(), "/index/dialog/authorize");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("apiKey".into(), "secretApiKey".into())));
        assert!(query.contains(&("response_type".into(), "code".into())));
    }
}
