use std::net::SocketAddr;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use hyper::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Method, StatusCode};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::codec::{self, ContentEncoding};
use crate::common::BenchConfig;
use crate::deadline::Deadline;
use crate::error::{BenchError, Result};
use crate::message::QueryResponse;
use crate::pool::{ConnectionPool, DispatchError, DispatchHandler, DispatchRequest};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "api-key";

/// How a single dispatch settled.
#[derive(Debug)]
enum Settlement {
    Decoded(Result<Vec<QueryResponse>>),
    Failed(DispatchError),
}

/// Per-request state: the chunks received so far plus the response head.
///
/// Owned by exactly one in-flight request. The sender is consumed by the first
/// terminal hook, later attempts are logged and dropped.
struct ResponseCollector {
    chunks: Vec<Bytes>,
    status: Option<StatusCode>,
    encoding: ContentEncoding,
    done_tx: Option<oneshot::Sender<Settlement>>,
}

impl ResponseCollector {
    fn new(done_tx: oneshot::Sender<Settlement>) -> Self {
        Self {
            chunks: Vec::new(),
            status: None,
            encoding: ContentEncoding::Identity,
            done_tx: Some(done_tx),
        }
    }

    fn settle(&mut self, settlement: Settlement) {
        match self.done_tx.take() {
            Some(done_tx) => {
                // The receiver only goes away if the caller stopped waiting.
                let _ = done_tx.send(settlement);
            }
            None => warn!("Dropping late settlement: {:?}", settlement),
        }
    }

    fn assemble(&mut self) -> Vec<u8> {
        let total = self.chunks.iter().map(Bytes::len).sum();
        let mut buffer = BytesMut::with_capacity(total);
        for chunk in self.chunks.drain(..) {
            buffer.extend_from_slice(&chunk);
        }
        buffer.to_vec()
    }
}

impl DispatchHandler for ResponseCollector {
    fn on_connect(&mut self, remote: Option<SocketAddr>) {
        debug!("Search request sent over {:?}", remote);
    }

    fn on_headers(&mut self, status: StatusCode, headers: &HeaderMap) -> bool {
        self.status = Some(status);
        self.encoding = ContentEncoding::from_headers(headers);
        true
    }

    fn on_data(&mut self, chunk: Bytes) {
        self.chunks.push(chunk);
    }

    fn on_complete(&mut self, _trailers: Option<&HeaderMap>) {
        let raw = self.assemble();
        let decoded = match self.status {
            Some(status) => codec::decode(raw, status, &self.encoding),
            None => Err(BenchError::Transport("response completed without a status line".to_string())),
        };
        self.settle(Settlement::Decoded(decoded));
    }

    fn on_error(&mut self, err: DispatchError) {
        self.settle(Settlement::Failed(err));
    }
}

/// Issues batch searches against one collection over a pooled connection.
pub struct SearchClient {
    pool: ConnectionPool,
    path: String,
    headers: HeaderMap,
    request_timeout: Duration,
}

impl SearchClient {
    pub fn new(config: &BenchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|e| BenchError::InvalidConfig(format!("api key is not a valid header value: {}", e)))?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        Ok(Self {
            pool: ConnectionPool::new(config.origin.clone(), &config.timeout_options),
            path: config.batch_path(),
            headers,
            request_timeout: config.timeout_options.request_timeout,
        })
    }

    /// Send one serialized batch and return the per-search results.
    ///
    /// The request is aborted once the deadline elapses and the abort is
    /// reported as [`BenchError::Timeout`]. The deadline timer is disarmed on
    /// every exit path.
    pub async fn perform_search(&self, body: Bytes) -> Result<Vec<QueryResponse>> {
        let mut headers = self.headers.clone();
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        let request = DispatchRequest {
            method: Method::POST,
            path: self.path.clone(),
            headers,
            body,
        };

        let mut deadline = Deadline::arm(self.request_timeout);
        let (done_tx, done_rx) = oneshot::channel();
        let mut collector = ResponseCollector::new(done_tx);

        self.pool.dispatch(request, deadline.signal(), &mut collector).await;
        deadline.disarm();

        let settlement = done_rx
            .await
            .map_err(|_| BenchError::Transport("dispatch ended without settling".to_string()))?;
        match settlement {
            Settlement::Decoded(result) => result,
            Settlement::Failed(DispatchError::Aborted) if deadline.expired() => {
                Err(BenchError::Timeout(deadline.timeout()))
            }
            Settlement::Failed(DispatchError::InvalidRequest(msg)) => Err(BenchError::InvalidRequest(msg)),
            Settlement::Failed(err) => Err(BenchError::Transport(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::CONTENT_ENCODING;

    #[tokio::test]
    async fn test_chunks_are_joined_in_order() {
        let (done_tx, done_rx) = oneshot::channel();
        let mut collector = ResponseCollector::new(done_tx);

        assert!(collector.on_headers(StatusCode::OK, &HeaderMap::new()));
        for part in [&b"{\"res"[..], &b"ult\":"[..], &b"[]}"[..]] {
            collector.on_data(Bytes::copy_from_slice(part));
        }
        collector.on_complete(None);

        match done_rx.await.unwrap() {
            Settlement::Decoded(Ok(result)) => assert!(result.is_empty()),
            other => panic!("unexpected settlement: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_headers_capture_encoding() {
        let (done_tx, _done_rx) = oneshot::channel();
        let mut collector = ResponseCollector::new(done_tx);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));

        collector.on_headers(StatusCode::ACCEPTED, &headers);
        assert_eq!(collector.status, Some(StatusCode::ACCEPTED));
        assert_eq!(collector.encoding, ContentEncoding::Gzip);
    }

    #[tokio::test]
    async fn test_settles_at_most_once() {
        let (done_tx, done_rx) = oneshot::channel();
        let mut collector = ResponseCollector::new(done_tx);

        collector.on_headers(StatusCode::OK, &HeaderMap::new());
        collector.on_data(Bytes::from_static(b"{\"result\":[]}"));
        collector.on_complete(None);
        collector.on_error(DispatchError::Aborted);

        assert!(matches!(done_rx.await.unwrap(), Settlement::Decoded(Ok(_))));
        assert!(collector.done_tx.is_none());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let config = BenchConfig {
            api_key: Some("bad\nkey".to_string()),
            ..BenchConfig::default()
        };
        assert!(matches!(SearchClient::new(&config), Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_api_key_header() {
        let config = BenchConfig {
            api_key: Some("secret".to_string()),
            ..BenchConfig::default()
        };
        let client = SearchClient::new(&config).unwrap();
        assert_eq!(client.headers.get(API_KEY_HEADER).unwrap(), "secret");
        assert_eq!(client.headers.get(ACCEPT_ENCODING).unwrap(), "gzip");
    }
}
