//! The generic response envelope returned by every Upstox REST endpoint.

use serde::Deserialize;

/// Generic wrapper carried by every successful Upstox response.
///
/// The payload lives in `data`; the remaining fields are status metadata
/// echoed by the server. Client methods unwrap the envelope and hand the
/// caller the typed `data` value directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code echoed in the body.
    #[serde(default)]
    pub code: Option<u16>,
    /// Status phrase (e.g. "OK").
    #[serde(default)]
    pub status: Option<String>,
    /// Server-side timestamp of the response.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Informational message, when present.
    #[serde(default)]
    pub message: Option<String>,
    /// The decoded payload.
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_payload() {
        let json = r#"{
            "code": 200,
            "status": "OK",
            "timestamp": "2018-06-19T20:11:57+05:30",
            "data": ["a", "b"]
        }"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, Some(200));
        assert_eq!(response.data, vec!["a", "b"]);
    }

    #[test]
    fn test_envelope_with_metadata_absent() {
        let json = r#"{"data": 42}"#;
        let response: ApiResponse<u64> = serde_json::from_str(json).unwrap();
        assert!(response.status.is_none());
        assert_eq!(response.data, 42);
    }
}
