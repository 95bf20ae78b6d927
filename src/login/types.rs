//! Request and wire types for the login flow.

use serde::Deserialize;

use crate::auth::AccessToken;
use crate::error::UpstoxError;

/// Grant types accepted by the token endpoint.
pub mod grant_types {
    /// The OAuth2 authorization-code grant.
    pub const AUTHORIZATION_CODE: &str = "authorization_code";
}

/// Parameters for the authorization-code exchange.
///
/// All fields are required; construction fails synchronously if any is
/// blank, before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// The authorization code obtained from the login dialog.
    pub code: String,
    /// The OAuth2 grant type, normally [`grant_types::AUTHORIZATION_CODE`].
    pub grant_type: String,
    /// The redirect URI registered with the application.
    pub redirect_uri: String,
}

impl TokenRequest {
    /// Create a new token request.
    pub fn new(
        code: impl Into<String>,
        grant_type: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, UpstoxError> {
        let code = code.into();
        let grant_type = grant_type.into();
        let redirect_uri = redirect_uri.into();

        if code.trim().is_empty() {
            return Err(UpstoxError::Validation("code must not be blank".into()));
        }
        if grant_type.trim().is_empty() {
            return Err(UpstoxError::Validation("grant_type must not be blank".into()));
        }
        if redirect_uri.trim().is_empty() {
            return Err(UpstoxError::Validation(
                "redirect_uri must not be blank".into(),
            ));
        }

        Ok(Self {
            code,
            grant_type,
            redirect_uri,
        })
    }
}

/// Wire shape of a successful token endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    /// Convert into the domain token, normalizing the token type to title
    /// case so the composed header reads `Bearer <token>` regardless of the
    /// server's casing.
    pub(crate) fn into_access_token(self) -> AccessToken {
        let token_type = normalize_token_type(&self.token_type);
        AccessToken::new(self.access_token, token_type, self.expires_in)
    }
}

fn normalize_token_type(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_fail_construction() {
        assert!(matches!(
            TokenRequest::new("", grant_types::AUTHORIZATION_CODE, "https://cb"),
            Err(UpstoxError::Validation(_))
        ));
        assert!(matches!(
            TokenRequest::new("code", "", "https://cb"),
            Err(UpstoxError::Validation(_))
        ));
        assert!(matches!(
            TokenRequest::new("code", grant_types::AUTHORIZATION_CODE, ""),
            Err(UpstoxError::Validation(_))
        ));
    }

    #[test]
    fn test_token_type_is_normalized() {
        let response = TokenResponse {
            access_token: "access_token_123456789".into(),
            token_type: "bearer".into(),
            expires_in: 86400,
        };
        let token = response.into_access_token();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.token, "access_token_123456789");
        assert_eq!(token.expires_in, 86400);
    }

    #[test]
    fn test_already_normalized_type_is_kept() {
        assert_eq!(normalize_token_type("Bearer"), "Bearer");
        assert_eq!(normalize_token_type(""), "");
    }
}
