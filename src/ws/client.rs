//! Market-data feed client.

use std::time::Duration;

use tracing::debug;

use crate::auth::Session;
use crate::error::UpstoxError;
use crate::ws::stream::MarketFeedStream;

/// WebSocket endpoint URLs.
pub mod endpoints {
    /// The live market-data feed.
    pub const WS_FEED: &str = "wss://ws-api.upstox.com/live-feed";
}

/// Configuration for feed connections.
#[derive(Debug, Clone)]
pub struct WsConfig {
    /// Keep-alive ping interval.
    pub ping_interval: Duration,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            ping_interval: Duration::from_secs(30),
        }
    }
}

/// Client for the Upstox market-data WebSocket feed.
///
/// Connecting requires an authenticated [`Session`]; the handshake carries
/// the same header pair as REST calls.
#[derive(Debug, Clone)]
pub struct MarketFeedClient {
    url: String,
    config: WsConfig,
}

impl MarketFeedClient {
    /// Create a new feed client with default settings.
    pub fn new() -> Self {
        Self::with_config(WsConfig::default())
    }

    /// Create a new feed client with custom configuration.
    pub fn with_config(config: WsConfig) -> Self {
        Self {
            url: endpoints::WS_FEED.to_string(),
            config,
        }
    }

    /// Create a client with a custom URL (useful for testing).
    pub fn with_url(url: impl Into<String>, config: WsConfig) -> Self {
        Self {
            url: url.into(),
            config,
        }
    }

    /// Connect to the feed using the session's current token and
    /// credentials.
    ///
    /// Fails with [`UpstoxError::NotAuthenticated`] when the session has no
    /// access token yet.
    pub async fn connect(&self, session: &Session) -> Result<MarketFeedStream, UpstoxError> {
        let auth = session.auth_headers()?;
        debug!(url = %self.url, "connecting to market data feed");
        MarketFeedStream::connect(&self.url, &auth, self.config.clone()).await
    }
}

impl Default for MarketFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiCredentials;

    #[tokio::test]
    async fn test_connect_requires_authentication() {
        let session = Session::new(ApiCredentials::new("key", "secret").unwrap());
        let client = MarketFeedClient::new();
        assert!(matches!(
            client.connect(&session).await,
            Err(UpstoxError::NotAuthenticated)
        ));
    }
}
