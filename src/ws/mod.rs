//! Upstox market-data WebSocket feed.
//!
//! Wraps inbound frames in typed envelopes carrying a handle to the
//! connection they arrived on:
//!
//! ```rust,ignore
//! use upstox_api_client::ws::{FeedEvent, MarketFeedClient};
//! use futures_util::StreamExt;
//!
//! let client = MarketFeedClient::new();
//! let mut stream = client.connect(&session).await?;
//!
//! while let Some(event) = stream.next().await {
//!     match event? {
//!         FeedEvent::Binary(message) => {
//!             println!("{} bytes from {}", message.len(), message.sender());
//!         }
//!         FeedEvent::Text(message) => println!("{}", message.as_str()),
//!         FeedEvent::Closed { .. } => break,
//!     }
//! }
//! ```

mod client;
mod messages;
mod stream;

pub use client::{MarketFeedClient, WsConfig, endpoints};
pub use messages::{BinaryMessage, FeedEvent, FeedHandle, TextMessage};
pub use stream::MarketFeedStream;
