//! Authentication module for the Upstox API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - The access token produced by the OAuth2 login flow
//! - The header pair injected into every authenticated request
//! - The session that holds the current token and credentials

mod credentials;
mod headers;
mod session;
mod token;

pub use credentials::ApiCredentials;
pub use headers::{AuthHeaders, X_API_KEY};
pub use session::Session;
pub use token::AccessToken;
