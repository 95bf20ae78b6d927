//! The bearer token obtained from the OAuth2 code exchange.

/// Access token returned by the login flow.
///
/// Produced once per login and treated as immutable thereafter. The library
/// performs no expiry tracking or refresh; callers re-run the login flow
/// when the token expires.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The opaque token string.
    pub token: String,
    /// Token type used in the `Authorization` header, normally "Bearer".
    pub token_type: String,
    /// Token lifetime in seconds, as reported by the server.
    pub expires_in: i64,
}

impl AccessToken {
    /// Create a new access token.
    pub fn new(
        token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        Self {
            token: token.into(),
            token_type: token_type.into(),
            expires_in,
        }
    }

    /// Compose the `Authorization` header value, `"<type> <token>"`.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_value_composition() {
        let token = AccessToken::new("access_token_123456789", "Bearer", 86400);
        assert_eq!(
            token.authorization_value(),
            "Bearer access_token_123456789"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = AccessToken::new("access_token_123456789", "Bearer", 86400);
        let debug_str = format!("{:?}", token);
        assert!(!debug_str.contains("access_token_123456789"));
        assert!(debug_str.contains("Bearer"));
    }
}
