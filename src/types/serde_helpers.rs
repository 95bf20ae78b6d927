//! Custom serde helpers for Upstox's quirky serialization formats.
//!
//! The Upstox API is inconsistent about optional fields: absent values may
//! arrive as missing keys, empty strings, or sentinel text. These modules
//! provide reusable serde helpers for those cases.

use serde::{Deserialize, Deserializer};

/// Deserialize a string field to `None` when it is empty.
///
/// Upstox returns `""` for unset identifiers such as `exchange_order_id`
/// on orders that have not reached the exchange yet.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use upstox_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     exchange_order_id: Option<String>,
/// }
///
/// let json = r#"{"exchange_order_id":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.exchange_order_id.is_none());
///
/// let json = r#"{"exchange_order_id":"1300000002487055"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert_eq!(response.exchange_order_id.unwrap(), "1300000002487055");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// Useful for numeric fields Upstox sometimes fills with sentinel strings
/// such as `"NA"`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use upstox_api_client::types::serde_helpers::default_on_error;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "default_on_error::deserialize", default)]
///     trigger_price: Option<Decimal>,
/// }
///
/// let json = r#"{"trigger_price":"NA"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.trigger_price.is_none());
///
/// let json = r#"{"trigger_price":253.25}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.trigger_price.is_some());
/// ```
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(T::deserialize(deserializer).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_string_as_none() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
            refid: Option<String>,
        }

        let test: Test = serde_json::from_str(r#"{"refid":""}"#).unwrap();
        assert!(test.refid.is_none());

        let test: Test = serde_json::from_str(r#"{"refid":"ABC123"}"#).unwrap();
        assert_eq!(test.refid.unwrap(), "ABC123");

        let test: Test = serde_json::from_str(r#"{}"#).unwrap();
        assert!(test.refid.is_none());
    }

    #[test]
    fn test_default_on_error_accepts_sentinel() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "default_on_error::deserialize", default)]
            price: Option<Decimal>,
        }

        let test: Test = serde_json::from_str(r#"{"price":"NA"}"#).unwrap();
        assert!(test.price.is_none());

        let test: Test = serde_json::from_str(r#"{"price":"253.25"}"#).unwrap();
        assert_eq!(test.price.unwrap().to_string(), "253.25");
    }
}
