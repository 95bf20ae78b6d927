//! Credential management for Upstox API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::UpstoxError;

/// The Upstox API key and secret pair.
///
/// Both fields are required; construction fails before any network
/// activity if either is blank. Equality is by value.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
}

impl ApiCredentials {
    /// Create new credentials from an API key and secret.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, UpstoxError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(UpstoxError::Validation("api_key must not be blank".into()));
        }
        if api_secret.trim().is_empty() {
            return Err(UpstoxError::Validation("api_secret must not be blank".into()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from the `UPSTOX_API_KEY` and `UPSTOX_API_SECRET`
    /// environment variables.
    pub fn from_env() -> Result<Self, UpstoxError> {
        let api_key = std::env::var("UPSTOX_API_KEY")
            .map_err(|_| UpstoxError::Validation("UPSTOX_API_KEY not set".into()))?;
        let api_secret = std::env::var("UPSTOX_API_SECRET")
            .map_err(|_| UpstoxError::Validation("UPSTOX_API_SECRET not set".into()))?;
        Self::new(api_key, api_secret)
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the variables are unset or blank.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Get the API key (public identifier).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl PartialEq for ApiCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.api_key == other.api_key
            && self.api_secret.expose_secret() == other.api_secret.expose_secret()
    }
}

impl Eq for ApiCredentials {}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_fail_construction() {
        assert!(matches!(
            ApiCredentials::new("", "secret-secret"),
            Err(UpstoxError::Validation(_))
        ));
        assert!(matches!(
            ApiCredentials::new("secretApiKey", "  "),
            Err(UpstoxError::Validation(_))
        ));
    }

    #[test]
    fn test_equality_by_value() {
        let a = ApiCredentials::new("secretApiKey", "secret-secret").unwrap();
        let b = ApiCredentials::new("secretApiKey", "secret-secret").unwrap();
        let c = ApiCredentials::new("secretApiKey", "other-secret").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("my_key", "super_secret").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
