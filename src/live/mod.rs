//! Authenticated clients for the Upstox live REST endpoints.
//!
//! [`LiveClient`] is prepared once per endpoint-group acquisition from a
//! [`Session`](crate::auth::Session) that has completed the login flow, and
//! is then reused for all calls against that group:
//!
//! ```rust,no_run
//! use upstox_api_client::auth::{ApiCredentials, Session};
//! use upstox_api_client::live::LiveClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(ApiCredentials::new("api_key", "api_secret")?);
//!     // ... run the login flow to authenticate the session ...
//!
//!     let client = LiveClient::new(&session)?;
//!     let orders = client.get_order_history().await?;
//!     println!("{} orders", orders.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod historical;
pub mod orders;

pub use client::{LiveClient, LiveClientBuilder};
pub use historical::{Candle, CandleRequest};
pub use orders::{Order, OrderRequest, Trade};
