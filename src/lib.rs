//! # Upstox Client
//!
//! An async Rust client library for the Upstox trading REST and WebSocket APIs.
//!
//! ## Features
//!
//! - OAuth2 login flow exchanging an authorization code for a bearer token
//! - Authentication headers injected into every outgoing call
//! - Typed request/response models for orders and historical candles
//! - Typed envelopes for market-data WebSocket frames
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use upstox_api_client::auth::{ApiCredentials, Session};
//! use upstox_api_client::live::LiveClient;
//! use upstox_api_client::login::{grant_types, LoginClient, TokenRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ApiCredentials::from_env()?;
//!     let session = Session::new(credentials);
//!
//!     let request = TokenRequest::new(
//!         "authorization_code_123456789",
//!         grant_types::AUTHORIZATION_CODE,
//!         "https://localhost:4567/callback",
//!     )?;
//!     LoginClient::new().login(&session, &request).await?;
//!
//!     let client = LiveClient::new(&session)?;
//!     let trades = client.get_trade_book().await?;
//!     println!("{} trades today", trades.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod live;
pub mod login;
pub mod types;
pub mod ws;

mod transport;

// Re-export commonly used types at crate root
pub use auth::{AccessToken, ApiCredentials, AuthHeaders, Session};
pub use error::UpstoxError;
pub use live::LiveClient;
pub use login::{LoginClient, TokenRequest};
pub use types::common::{OrderDuration, OrderType, Product, TransactionType};

/// Result type alias using UpstoxError
pub type Result<T> = std::result::Result<T, UpstoxError>;
