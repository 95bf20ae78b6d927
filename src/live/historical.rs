//! Historical OHLC candle endpoint and its types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::endpoints;
use crate::error::UpstoxError;
use crate::live::LiveClient;
use crate::types::CandleInterval;

/// One row of OHLC market data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candle {
    /// Candle open time, milliseconds since the epoch.
    pub timestamp: i64,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
    /// Percent change over the previous close.
    #[serde(rename = "cp", default)]
    pub percent_change: Option<Decimal>,
}

/// Parameters for a historical candle request.
#[derive(Debug, Clone)]
pub struct CandleRequest {
    /// Exchange segment (e.g. "NSE_EQ").
    pub exchange: String,
    /// Trading symbol.
    pub symbol: String,
    /// Candle interval.
    pub interval: CandleInterval,
    /// Start of the range, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// End of the range, `DD-MM-YYYY`.
    pub end_date: Option<String>,
}

impl CandleRequest {
    /// Create a request for the default (most recent) range.
    pub fn new(
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        interval: CandleInterval,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            interval,
            start_date: None,
            end_date: None,
        }
    }

    /// Restrict the request to a date range.
    pub fn with_range(
        mut self,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    fn query(&self) -> CandleQuery<'_> {
        CandleQuery {
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
        }
    }
}

/// Query string for the candle endpoint.
#[derive(Serialize)]
struct CandleQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<&'a str>,
}

impl LiveClient {
    /// Fetch historical OHLC candles for a symbol.
    pub async fn get_candles(&self, request: &CandleRequest) -> Result<Vec<Candle>, UpstoxError> {
        let path =
            endpoints::historical_candles(&request.exchange, &request.symbol, request.interval);
        self.get_with_params(&path, &request.query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_decodes_numeric_prices() {
        let json = r#"{
            "timestamp": 1529558100000,
            "open": 253.0,
            "high": 255.75,
            "low": 252.1,
            "close": 254.4,
            "volume": 190654,
            "cp": 0.55
        }"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.timestamp, 1529558100000);
        assert_eq!(candle.volume, 190654);
        assert!(candle.percent_change.is_some());
    }

    #[test]
    fn test_candle_equality_by_value() {
        let json = r#"{"timestamp":1,"open":1,"high":2,"low":0.5,"close":1.5,"volume":10}"#;
        let a: Candle = serde_json::from_str(json).unwrap();
        let b: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(a, b);
        assert!(a.percent_change.is_none());
    }

    #[test]
    fn test_query_serializes_only_set_fields() {
        let request = CandleRequest::new("NSE_EQ", "RELIANCE", CandleInterval::Day);
        assert_eq!(serde_urlencoded::to_string(request.query()).unwrap(), "");

        let request = request.with_range("01-06-2018", "19-06-2018");
        assert_eq!(
            serde_urlencoded::to_string(request.query()).unwrap(),
            "start_date=01-06-2018&end_date=19-06-2018"
        );
    }
}
