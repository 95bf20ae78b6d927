//! Common types used across the Upstox client library.

pub mod common;
pub mod response;
pub mod serde_helpers;

pub use common::*;
pub use response::ApiResponse;
