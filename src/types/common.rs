//! Common domain types for the Upstox API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Buy order
    #[serde(rename = "B")]
    Buy,
    /// Sell order
    #[serde(rename = "S")]
    Sell,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "B"),
            TransactionType::Sell => write!(f, "S"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order - execute immediately at best available price
    #[serde(rename = "M")]
    Market,
    /// Limit order - execute at specified price or better
    #[serde(rename = "L")]
    Limit,
    /// Stop-loss limit order
    #[serde(rename = "SL")]
    StopLoss,
    /// Stop-loss market order
    #[serde(rename = "SL-M")]
    StopLossMarket,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::Market => "M",
            OrderType::Limit => "L",
            OrderType::StopLoss => "SL",
            OrderType::StopLossMarket => "SL-M",
        };
        write!(f, "{}", s)
    }
}

/// Product category of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// Intraday position, squared off the same day
    #[serde(rename = "I")]
    Intraday,
    /// Delivery position
    #[serde(rename = "D")]
    Delivery,
    /// Cover order
    #[serde(rename = "CO")]
    CoverOrder,
    /// One-cancels-other bracket order
    #[serde(rename = "OCO")]
    OneCancelsOther,
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Product::Intraday => "I",
            Product::Delivery => "D",
            Product::CoverOrder => "CO",
            Product::OneCancelsOther => "OCO",
        };
        write!(f, "{}", s)
    }
}

/// Validity of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDuration {
    /// Valid for the trading day
    #[default]
    #[serde(rename = "DAY")]
    Day,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
}

impl std::fmt::Display for OrderDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderDuration::Day => write!(f, "DAY"),
            OrderDuration::ImmediateOrCancel => write!(f, "IOC"),
        }
    }
}

/// Candle interval for historical data requests.
///
/// The interval is part of the request path, so `Display` produces the
/// path segment the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    /// 1 minute candles
    #[serde(rename = "1")]
    OneMinute,
    /// 3 minute candles
    #[serde(rename = "3")]
    ThreeMinutes,
    /// 5 minute candles
    #[serde(rename = "5")]
    FiveMinutes,
    /// 10 minute candles
    #[serde(rename = "10")]
    TenMinutes,
    /// 15 minute candles
    #[serde(rename = "15")]
    FifteenMinutes,
    /// 30 minute candles
    #[serde(rename = "30")]
    ThirtyMinutes,
    /// 60 minute candles
    #[serde(rename = "60")]
    SixtyMinutes,
    /// Daily candles
    #[serde(rename = "day")]
    Day,
    /// Weekly candles
    #[serde(rename = "week")]
    Week,
    /// Monthly candles
    #[serde(rename = "month")]
    Month,
}

impl std::fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CandleInterval::OneMinute => "1",
            CandleInterval::ThreeMinutes => "3",
            CandleInterval::FiveMinutes => "5",
            CandleInterval::TenMinutes => "10",
            CandleInterval::FifteenMinutes => "15",
            CandleInterval::ThirtyMinutes => "30",
            CandleInterval::SixtyMinutes => "60",
            CandleInterval::Day => "day",
            CandleInterval::Week => "week",
            CandleInterval::Month => "month",
        };
        write!(f, "{}", s)
    }
}
