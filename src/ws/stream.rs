//! WebSocket stream implementation for the market-data feed.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, Stream, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::{Interval, interval};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};

use crate::auth::{AuthHeaders, X_API_KEY};
use crate::error::UpstoxError;
use crate::ws::client::WsConfig;
use crate::ws::messages::{BinaryMessage, FeedEvent, FeedHandle, TextMessage};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, WsMessage>;
type WsReceiver = SplitStream<WsStream>;

/// Process-wide counter identifying feed connections in logs.
static CONNECTION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A stream of typed events from an Upstox market-data connection.
///
/// Implements [`Stream`] yielding [`FeedEvent`]s. Inbound frames are
/// wrapped with the handle of the connection they arrived on; protocol
/// pings are answered by the transport layer. The feed defines no outbound
/// framing, so the only write operations are keep-alive pings and
/// [`close`](MarketFeedStream::close).
pub struct MarketFeedStream {
    sink: Option<Arc<Mutex<WsSink>>>,
    receiver: Option<WsReceiver>,
    handle: FeedHandle,
    ping_interval: Interval,
    connected: bool,
}

impl MarketFeedStream {
    /// Connect to the feed, attaching the auth headers to the handshake.
    pub(crate) async fn connect(
        url: &str,
        auth: &AuthHeaders,
        config: WsConfig,
    ) -> Result<Self, UpstoxError> {
        let mut request = url.into_client_request()?;
        let headers = request.headers_mut();
        headers.insert(
            X_API_KEY,
            HeaderValue::from_str(auth.api_key())
                .map_err(|e| UpstoxError::Validation(format!("invalid X-API-KEY value: {e}")))?,
        );
        headers.insert(
            "Authorization",
            HeaderValue::from_str(auth.authorization()).map_err(|e| {
                UpstoxError::Validation(format!("invalid Authorization value: {e}"))
            })?,
        );

        let (ws_stream, _) = connect_async(request)
            .await
            .map_err(|e| UpstoxError::WebSocketMsg(format!("Failed to connect to {url}: {e}")))?;

        let handle = FeedHandle::new(CONNECTION_COUNTER.fetch_add(1, Ordering::Relaxed), url);
        debug!(%handle, "market data feed connected");

        let (sink, receiver) = ws_stream.split();
        let ping_interval = interval(config.ping_interval);

        Ok(Self {
            sink: Some(Arc::new(Mutex::new(sink))),
            receiver: Some(receiver),
            handle,
            ping_interval,
            connected: true,
        })
    }

    /// The handle identifying this connection.
    pub fn handle(&self) -> &FeedHandle {
        &self.handle
    }

    /// Check if the connection is open.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Close the connection gracefully.
    pub async fn close(&mut self) -> Result<(), UpstoxError> {
        if let Some(sink) = self.sink.take() {
            let mut sink = sink.lock().await;
            let _ = sink.send(WsMessage::Close(None)).await;
        }
        self.receiver = None;
        self.connected = false;
        Ok(())
    }
}

impl std::fmt::Debug for MarketFeedStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketFeedStream")
            .field("handle", &self.handle)
            .field("connected", &self.connected)
            .finish()
    }
}

impl Stream for MarketFeedStream {
    type Item = Result<FeedEvent, UpstoxError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // Keep-alive ping on the configured interval.
        if self.ping_interval.poll_tick(cx).is_ready() && self.connected {
            if let Some(sink) = &self.sink {
                let sink = sink.clone();
                tokio::spawn(async move {
                    let mut sink = sink.lock().await;
                    let _ = sink.send(WsMessage::Ping(Vec::new().into())).await;
                });
            }
        }

        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(None);
        };

        match Pin::new(receiver).poll_next(cx) {
            Poll::Ready(Some(Ok(msg))) => {
                let this = self.as_mut().get_mut();
                match msg {
                    WsMessage::Binary(data) => Poll::Ready(Some(Ok(FeedEvent::Binary(
                        BinaryMessage::new(this.handle.clone(), data.to_vec()),
                    )))),
                    WsMessage::Text(text) => Poll::Ready(Some(Ok(FeedEvent::Text(
                        TextMessage::new(this.handle.clone(), text.as_str()),
                    )))),
                    WsMessage::Ping(_) | WsMessage::Pong(_) => {
                        // Handled automatically by tungstenite.
                        cx.waker().wake_by_ref();
                        Poll::Pending
                    }
                    WsMessage::Close(frame) => {
                        this.connected = false;
                        let reason = frame.map(|f| f.reason.to_string());
                        Poll::Ready(Some(Ok(FeedEvent::Closed { reason })))
                    }
                    WsMessage::Frame(_) => {
                        cx.waker().wake_by_ref();
                        Poll::Pending
                    }
                }
            }
            Poll::Ready(Some(Err(e))) => {
                let this = self.as_mut().get_mut();
                this.connected = false;
                warn!(handle = %this.handle, "WebSocket error: {}", e);
                Poll::Ready(Some(Err(UpstoxError::WebSocket(e))))
            }
            Poll::Ready(None) => {
                let this = self.as_mut().get_mut();
                this.connected = false;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
