//! Upstox REST endpoint constants and path builders.
//!
//! Every endpoint is an explicit path constant or builder function; the
//! clients pair these with the shared request helpers instead of any
//! reflection-driven dispatch.

use crate::types::CandleInterval;

/// Base URL for the Upstox REST API.
pub const UPSTOX_BASE_URL: &str = "https://api.upstox.com";

/// Login endpoints (no bearer token required).
pub mod login {
    /// Exchange an authorization code for an access token.
    pub const TOKEN: &str = "/index/oauth/token";
    /// Browser dialog that produces the authorization code.
    pub const AUTHORIZE: &str = "/index/dialog/authorize";
}

/// Orders placed by the user.
pub const ORDERS: &str = "/live/orders";

/// Trades for the current day.
pub const TRADE_BOOK: &str = "/live/trade-book";

/// A single order, or a comma-separated list for cancellation.
pub fn order(order_id: &str) -> String {
    format!("/live/orders/{order_id}")
}

/// Trades executed for a given order.
pub fn order_trades(order_id: &str) -> String {
    format!("/live/orders/{order_id}/trades")
}

/// Historical OHLC candles for a symbol at a given interval.
pub fn historical_candles(exchange: &str, symbol: &str, interval: CandleInterval) -> String {
    format!("/live/historical/{exchange}/{symbol}/{interval}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_paths() {
        assert_eq!(order("ASI-10042"), "/live/orders/ASI-10042");
        assert_eq!(order_trades("ASI-10042"), "/live/orders/ASI-10042/trades");
    }

    #[test]
    fn test_historical_path_uses_interval_segment() {
        assert_eq!(
            historical_candles("NSE_EQ", "RELIANCE", CandleInterval::TenMinutes),
            "/live/historical/NSE_EQ/RELIANCE/10"
        );
    }
}
