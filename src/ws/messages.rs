//! Typed envelopes for frames received from the market-data socket.

use std::str::Utf8Error;
use std::sync::Arc;

/// Payloads larger than this are not echoed into logs.
const DISPLAY_PAYLOAD_LIMIT: usize = 10_000;

/// Identity of the connection a message arrived on.
///
/// A cheap, cloneable handle used only for attribution and logging. It
/// holds no socket resources and cannot be used to affect the connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedHandle {
    id: u64,
    url: Arc<str>,
}

impl FeedHandle {
    pub(crate) fn new(id: u64, url: &str) -> Self {
        Self {
            id,
            url: Arc::from(url),
        }
    }

    /// Sequence number of the connection within this process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// URL the connection was opened against.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for FeedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "feed-{} ({})", self.id, self.url)
    }
}

/// A binary frame received from the feed.
///
/// Equality, hashing and display are by payload value; the sender handle
/// is attribution only.
#[derive(Debug, Clone)]
pub struct BinaryMessage {
    sender: FeedHandle,
    payload: Vec<u8>,
}

impl BinaryMessage {
    /// Wrap a payload received on the given connection.
    pub fn new(sender: FeedHandle, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            sender,
            payload: payload.into(),
        }
    }

    /// The connection this message arrived on.
    pub fn sender(&self) -> &FeedHandle {
        &self.sender
    }

    /// Number of bytes in the message.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The raw payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the wrapper and take the payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.payload
    }

    /// Decode the payload as UTF-8 text.
    pub fn as_utf8(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.payload)
    }

    /// Write the payload to an output sink.
    pub fn write_to<W: std::io::Write>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(&self.payload)
    }
}

impl PartialEq for BinaryMessage {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl Eq for BinaryMessage {}

impl std::hash::Hash for BinaryMessage {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.payload.hash(state);
    }
}

impl std::fmt::Display for BinaryMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.payload.len() <= DISPLAY_PAYLOAD_LIMIT {
            write!(
                f,
                "BinaryMessage[{}, sender={}]",
                String::from_utf8_lossy(&self.payload),
                self.sender
            )
        } else {
            write!(
                f,
                "BinaryMessage[{} bytes hidden, sender={}]",
                self.payload.len(),
                self.sender
            )
        }
    }
}

/// A text frame received from the feed.
#[derive(Debug, Clone)]
pub struct TextMessage {
    sender: FeedHandle,
    text: String,
}

impl TextMessage {
    /// Wrap a text payload received on the given connection.
    pub fn new(sender: FeedHandle, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    /// The connection this message arrived on.
    pub fn sender(&self) -> &FeedHandle {
        &self.sender
    }

    /// Number of bytes in the message.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the wrapper and take the payload.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for TextMessage {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TextMessage {}

impl std::fmt::Display for TextMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.len() <= DISPLAY_PAYLOAD_LIMIT {
            write!(f, "TextMessage[{}, sender={}]", self.text, self.sender)
        } else {
            write!(
                f,
                "TextMessage[{} bytes hidden, sender={}]",
                self.text.len(),
                self.sender
            )
        }
    }
}

/// An event yielded by a [`MarketFeedStream`](crate::ws::MarketFeedStream).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A binary frame.
    Binary(BinaryMessage),
    /// A text frame.
    Text(TextMessage),
    /// The server closed the connection.
    Closed {
        /// Reason carried by the close frame, when present.
        reason: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> FeedHandle {
        FeedHandle::new(1, "wss://ws-api.upstox.com/live-feed")
    }

    #[test]
    fn test_binary_round_trip() {
        let payload = vec![0x01, 0x02, 0x03, 0xff];
        let message = BinaryMessage::new(handle(), payload.clone());
        assert_eq!(message.len(), 4);
        assert_eq!(message.as_bytes(), payload.as_slice());
        assert_eq!(message.into_bytes(), payload);
    }

    #[test]
    fn test_binary_write_to_sink() {
        let message = BinaryMessage::new(handle(), b"ltp=253.25".as_slice());
        let mut sink = Vec::new();
        message.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"ltp=253.25");
    }

    #[test]
    fn test_binary_utf8_decode() {
        let message = BinaryMessage::new(handle(), b"hello".as_slice());
        assert_eq!(message.as_utf8().unwrap(), "hello");

        let message = BinaryMessage::new(handle(), vec![0xff, 0xfe]);
        assert!(message.as_utf8().is_err());
    }

    #[test]
    fn test_equality_ignores_sender() {
        let a = BinaryMessage::new(FeedHandle::new(1, "wss://a"), b"x".as_slice());
        let b = BinaryMessage::new(FeedHandle::new(2, "wss://b"), b"x".as_slice());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_truncates_only_above_limit() {
        let at_limit = BinaryMessage::new(handle(), vec![b'a'; 10_000]);
        assert!(!at_limit.to_string().contains("hidden"));

        let over_limit = BinaryMessage::new(handle(), vec![b'a'; 10_001]);
        let rendered = over_limit.to_string();
        assert!(rendered.contains("10001 bytes hidden"));
        assert!(!rendered.contains("aaaa"));
    }

    #[test]
    fn test_text_message_payload_access() {
        let message = TextMessage::new(handle(), "ack");
        assert_eq!(message.as_str(), "ack");
        assert_eq!(message.len(), 3);
        assert_eq!(message.to_string(), format!("TextMessage[ack, sender={}]", handle()));
    }
}
