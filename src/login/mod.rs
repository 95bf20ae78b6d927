//! OAuth2 login flow for the Upstox API.
//!
//! Trades a short-lived authorization code for a bearer token:
//!
//! ```rust,no_run
//! use upstox_api_client::auth::{ApiCredentials, Session};
//! use upstox_api_client::login::{grant_types, LoginClient, TokenRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ApiCredentials::new("api_key", "api_secret")?;
//!     let session = Session::new(credentials);
//!
//!     let request = TokenRequest::new(
//!         "authorization_code_123456789",
//!         grant_types::AUTHORIZATION_CODE,
//!         "https://localhost:4567/callback",
//!     )?;
//!
//!     let token = LoginClient::new().login(&session, &request).await?;
//!     println!("token expires in {}s", token.expires_in);
//!     Ok(())
//! }
//! ```

mod client;
mod types;

pub use client::{LoginClient, LoginClientBuilder, authorize_url};
pub use types::{TokenRequest, grant_types};
