//! The header pair injected into every authenticated request.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::UpstoxError;

/// Name of the API key header sent with every call.
pub const X_API_KEY: &str = "X-API-KEY";

/// The two headers attached to every outgoing authenticated call:
/// `Authorization: <type> <token>` and `X-API-KEY: <key>`.
///
/// Derived from the session at client preparation time and never persisted.
/// Values are sent verbatim; an empty value is sent empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    authorization: String,
    api_key: String,
}

impl AuthHeaders {
    /// Create a header pair from a composed authorization value and API key.
    pub fn new(authorization: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            authorization: authorization.into(),
            api_key: api_key.into(),
        }
    }

    /// The composed `Authorization` value.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// The API key value.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Set `Authorization` and `X-API-KEY` on the given header map,
    /// overwriting any previous values and touching no other entry.
    /// Applying twice with identical inputs leaves the map unchanged.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), UpstoxError> {
        let authorization = HeaderValue::from_str(&self.authorization).map_err(|e| {
            UpstoxError::Validation(format!("invalid Authorization header value: {e}"))
        })?;
        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| UpstoxError::Validation(format!("invalid X-API-KEY header value: {e}")))?;

        headers.insert(AUTHORIZATION, authorization);
        headers.insert(X_API_KEY, api_key);
        Ok(())
    }

    /// Build a fresh header map containing exactly the two auth headers.
    pub fn to_header_map(&self) -> Result<HeaderMap, UpstoxError> {
        let mut headers = HeaderMap::new();
        self.apply(&mut headers)?;
        Ok(headers)
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("authorization", &"[REDACTED]")
            .field("api_key", &self.api_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_apply_sets_exactly_two_headers() {
        let auth = AuthHeaders::new("Bearer access_token_123456789", "secretApiKey");
        let mut headers = HeaderMap::new();
        auth.apply(&mut headers).unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Bearer access_token_123456789"
        );
        assert_eq!(headers.get(X_API_KEY).unwrap(), "secretApiKey");
    }

    #[test]
    fn test_apply_preserves_other_headers() {
        let auth = AuthHeaders::new("Bearer token", "key");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        auth.apply(&mut headers).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let auth = AuthHeaders::new("Bearer token", "key");
        let mut once = HeaderMap::new();
        auth.apply(&mut once).unwrap();

        let mut twice = once.clone();
        auth.apply(&mut twice).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_overwrites_stale_values() {
        let stale = AuthHeaders::new("Bearer old", "old-key");
        let fresh = AuthHeaders::new("Bearer new", "new-key");

        let mut headers = HeaderMap::new();
        stale.apply(&mut headers).unwrap();
        fresh.apply(&mut headers).unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer new");
        assert_eq!(headers.get(X_API_KEY).unwrap(), "new-key");
    }

    #[test]
    fn test_empty_values_are_sent_empty() {
        let auth = AuthHeaders::new("", "");
        let headers = auth.to_header_map().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "");
        assert_eq!(headers.get(X_API_KEY).unwrap(), "");
    }
}
