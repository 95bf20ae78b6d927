//! Order endpoints and their request/response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::endpoints;
use crate::error::UpstoxError;
use crate::live::LiveClient;
use crate::types::serde_helpers::{default_on_error, empty_string_as_none};
use crate::types::{OrderDuration, OrderType, Product, TransactionType};

/// An order placed by the user, as reported by the order book.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Exchange the order was routed to (e.g. "NSE_EQ").
    pub exchange: String,
    /// Instrument token on the exchange.
    #[serde(default)]
    pub token: Option<u64>,
    /// Trading symbol.
    pub symbol: String,
    /// Product category.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub product: Option<Product>,
    /// Order type.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub order_type: Option<OrderType>,
    /// Order validity.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub duration: Option<OrderDuration>,
    /// Limit price, absent for market orders.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub price: Option<Decimal>,
    /// Trigger price for stop orders.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub trigger_price: Option<Decimal>,
    /// Ordered quantity.
    pub quantity: u64,
    /// Quantity disclosed to the market.
    #[serde(default)]
    pub disclosed_quantity: Option<u64>,
    /// Buy or sell.
    pub transaction_type: TransactionType,
    /// Average fill price so far.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub average_price: Option<Decimal>,
    /// Quantity filled so far.
    #[serde(default)]
    pub traded_quantity: Option<u64>,
    /// Exchange or OMS message attached to the order.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub message: Option<String>,
    /// Identifier assigned by the exchange, once accepted.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub exchange_order_id: Option<String>,
    /// Parent order for bracket/cover legs.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub parent_order_id: Option<String>,
    /// Identifier assigned by Upstox.
    pub order_id: String,
    /// Timestamp reported by the exchange.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub exchange_time: Option<String>,
    /// Microsecond timestamp of the order event.
    #[serde(default)]
    pub time_in_micro: Option<String>,
    /// Current order status string.
    #[serde(default)]
    pub status: Option<String>,
    /// Whether this is an after-market order.
    #[serde(default)]
    pub is_amo: Option<bool>,
    /// Validity date for good-till orders.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub valid_date: Option<String>,
    /// Client-side request identifier.
    #[serde(default)]
    pub order_request_id: Option<String>,
}

/// Parameters for placing or modifying an order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Buy or sell.
    pub transaction_type: TransactionType,
    /// Exchange to route to (e.g. "NSE_EQ").
    pub exchange: String,
    /// Trading symbol.
    pub symbol: String,
    /// Quantity to order.
    pub quantity: u64,
    /// Order type.
    pub order_type: OrderType,
    /// Product category.
    pub product: Product,
    /// Limit price, required for limit orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Trigger price for stop orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<Decimal>,
    /// Quantity disclosed to the market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclosed_quantity: Option<u64>,
    /// Order validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<OrderDuration>,
    /// Place as an after-market order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_amo: Option<bool>,
    /// Stop-loss points for cover/bracket orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<Decimal>,
    /// Square-off points for bracket orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_off: Option<Decimal>,
    /// Trailing ticks for bracket orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_ticks: Option<u32>,
}

impl OrderRequest {
    /// Create a market order request.
    pub fn market(
        transaction_type: TransactionType,
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u64,
        product: Product,
    ) -> Self {
        Self {
            transaction_type,
            exchange: exchange.into(),
            symbol: symbol.into(),
            quantity,
            order_type: OrderType::Market,
            product,
            price: None,
            trigger_price: None,
            disclosed_quantity: None,
            duration: None,
            is_amo: None,
            stop_loss: None,
            square_off: None,
            trailing_ticks: None,
        }
    }

    /// Create a limit order request.
    pub fn limit(
        transaction_type: TransactionType,
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        quantity: u64,
        product: Product,
        price: Decimal,
    ) -> Self {
        let mut request = Self::market(transaction_type, exchange, symbol, quantity, product);
        request.order_type = OrderType::Limit;
        request.price = Some(price);
        request
    }

    /// Set the trigger price.
    pub fn with_trigger_price(mut self, trigger_price: Decimal) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Set the order validity.
    pub fn with_duration(mut self, duration: OrderDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Mark the order as an after-market order.
    pub fn with_amo(mut self, is_amo: bool) -> Self {
        self.is_amo = Some(is_amo);
        self
    }

    /// Set the disclosed quantity.
    pub fn with_disclosed_quantity(mut self, disclosed_quantity: u64) -> Self {
        self.disclosed_quantity = Some(disclosed_quantity);
        self
    }
}

/// A trade executed against one of the user's orders.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Exchange the trade executed on.
    pub exchange: String,
    /// Instrument token on the exchange.
    #[serde(default)]
    pub token: Option<u64>,
    /// Trading symbol.
    pub symbol: String,
    /// Product category.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub product: Option<Product>,
    /// Order type of the originating order.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub order_type: Option<OrderType>,
    /// Buy or sell.
    pub transaction_type: TransactionType,
    /// Quantity filled in this trade.
    pub traded_quantity: u64,
    /// Timestamp reported by the exchange.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub exchange_time: Option<String>,
    /// Microsecond timestamp of the fill.
    #[serde(default)]
    pub time_in_micro: Option<String>,
    /// Fill price.
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub traded_price: Option<Decimal>,
    /// Identifier of the trade.
    pub trade_id: String,
    /// Identifier of the originating order.
    pub order_id: String,
    /// Exchange-side identifier of the originating order.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub exchange_order_id: Option<String>,
}

impl LiveClient {
    /// Fetch the list of orders placed by the user.
    pub async fn get_order_history(&self) -> Result<Vec<Order>, UpstoxError> {
        self.get(endpoints::ORDERS).await
    }

    /// Fetch the details of a particular order.
    ///
    /// The response is a list: an order that has been modified appears once
    /// per revision.
    pub async fn get_order_details(&self, order_id: &str) -> Result<Vec<Order>, UpstoxError> {
        self.get(&endpoints::order(order_id)).await
    }

    /// Fetch the trades for the current day.
    pub async fn get_trade_book(&self) -> Result<Vec<Trade>, UpstoxError> {
        self.get(endpoints::TRADE_BOOK).await
    }

    /// Fetch the trades executed for the given order.
    pub async fn get_trade_history(&self, order_id: &str) -> Result<Vec<Trade>, UpstoxError> {
        self.get(&endpoints::order_trades(order_id)).await
    }

    /// Place an order.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<Order, UpstoxError> {
        self.post_json(endpoints::ORDERS, request).await
    }

    /// Modify an open order.
    pub async fn modify_order(
        &self,
        order_id: &str,
        request: &OrderRequest,
    ) -> Result<Order, UpstoxError> {
        self.put_json(&endpoints::order(order_id), request).await
    }

    /// Cancel one or more orders, given as a comma-separated id list.
    pub async fn cancel_orders(&self, order_ids_csv: &str) -> Result<String, UpstoxError> {
        self.delete(&endpoints::order(order_ids_csv)).await
    }

    /// Cancel all open orders.
    pub async fn cancel_all_orders(&self) -> Result<String, UpstoxError> {
        self.delete(endpoints::ORDERS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_with_sentinel_fields() {
        let json = r#"{
            "exchange": "NSE_EQ",
            "token": 2885,
            "symbol": "RELIANCE",
            "product": "I",
            "order_type": "L",
            "duration": "DAY",
            "price": 253.25,
            "trigger_price": "NA",
            "quantity": 10,
            "transaction_type": "B",
            "exchange_order_id": "",
            "order_id": "ASI-10042",
            "status": "open"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ASI-10042");
        assert_eq!(order.order_type, Some(OrderType::Limit));
        assert!(order.trigger_price.is_none());
        assert!(order.exchange_order_id.is_none());
        assert_eq!(order.transaction_type, TransactionType::Buy);
    }

    #[test]
    fn test_order_request_skips_unset_fields() {
        let request = OrderRequest::market(
            TransactionType::Buy,
            "NSE_EQ",
            "RELIANCE",
            10,
            Product::Intraday,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["order_type"], "M");
        assert!(json.get("price").is_none());
        assert!(json.get("trigger_price").is_none());
    }

    #[test]
    fn test_limit_request_carries_price() {
        let request = OrderRequest::limit(
            TransactionType::Sell,
            "NSE_EQ",
            "RELIANCE",
            5,
            Product::Delivery,
            Decimal::new(25325, 2),
        )
        .with_duration(OrderDuration::ImmediateOrCancel);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["order_type"], "L");
        assert_eq!(json["duration"], "IOC");
        assert_eq!(json["price"], "253.25");
    }
}
