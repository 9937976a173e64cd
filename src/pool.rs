use std::net::SocketAddr;

use bytes::Bytes;
use hyper::body::HttpBody;
use hyper::client::connect::HttpInfo;
use hyper::client::HttpConnector;
use hyper::header::HeaderMap;
use hyper::{Body, Client, Method, Request, StatusCode, Uri};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::common::TimeoutOptions;

/// Idle sockets kept per origin. One request is in flight at a time, so
/// a handful is plenty.
pub const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Why a dispatch ended without a complete response.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("{0}")]
    Transport(#[from] hyper::Error),

    /// The abort signal was raised while the request was in flight.
    #[error("request aborted")]
    Aborted,

    /// The headers hook declined to receive the body.
    #[error("response with status {0} refused by handler")]
    Refused(StatusCode),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Hooks driven by [`ConnectionPool::dispatch`] over the life of one request.
///
/// Exactly one of `on_complete` and `on_error` is called, and it is the last
/// call the handler receives.
pub trait DispatchHandler {
    /// The request went out on a pooled socket. Fires when the response head
    /// arrives, not when the socket is established, since the pooled client
    /// does not report connection setup.
    fn on_connect(&mut self, _remote: Option<SocketAddr>) {}

    /// Status line and headers arrived. Returning `false` stops the transfer.
    fn on_headers(&mut self, status: StatusCode, headers: &HeaderMap) -> bool;

    /// One body chunk, in arrival order.
    fn on_data(&mut self, chunk: Bytes);

    /// The body has been fully received.
    fn on_complete(&mut self, trailers: Option<&HeaderMap>);

    fn on_error(&mut self, err: DispatchError);
}

/// A request to issue against the pool's origin.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub method: Method,
    /// Path and query, relative to the origin.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Persistent HTTP/1.1 connections to a single origin.
///
/// Idle sockets are closed by the client after `idle_timeout`, which is kept
/// below the server's own idle reclaim so a request is never written onto a
/// socket the server is about to close.
#[derive(Clone)]
pub struct ConnectionPool {
    client: Client<HttpConnector, Body>,
    origin: Uri,
}

impl ConnectionPool {
    pub fn new(origin: Uri, timeout_options: &TimeoutOptions) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_nodelay(true);
        let client = Client::builder()
            .pool_idle_timeout(timeout_options.idle_timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build(connector);
        Self { client, origin }
    }

    /// Issue one request and drive the handler until it settles.
    ///
    /// Cancelling `signal` while the exchange is pending drops the in-flight
    /// request and settles the handler with [`DispatchError::Aborted`].
    pub async fn dispatch<H>(&self, request: DispatchRequest, signal: CancellationToken, handler: &mut H)
    where
        H: DispatchHandler,
    {
        let request = match self.build_request(request) {
            Ok(request) => request,
            Err(err) => {
                handler.on_error(err);
                return;
            }
        };

        let outcome = tokio::select! {
            biased;
            _ = signal.cancelled() => Err(DispatchError::Aborted),
            result = self.exchange(request, handler) => result,
        };

        match outcome {
            Ok(trailers) => handler.on_complete(trailers.as_ref()),
            Err(err) => {
                debug!("Dispatch to {} failed: {}", self.origin, err);
                handler.on_error(err);
            }
        }
    }

    async fn exchange<H>(&self, request: Request<Body>, handler: &mut H) -> Result<Option<HeaderMap>, DispatchError>
    where
        H: DispatchHandler,
    {
        let response = self.client.request(request).await?;

        let remote = response.extensions().get::<HttpInfo>().map(|info| info.remote_addr());
        debug!("Connected to {:?}", remote);
        handler.on_connect(remote);

        let (parts, mut body) = response.into_parts();
        debug!("Received response headers: {} {:?}", parts.status, parts.headers);
        if !handler.on_headers(parts.status, &parts.headers) {
            return Err(DispatchError::Refused(parts.status));
        }

        while let Some(chunk) = body.data().await {
            let chunk = chunk?;
            debug!("Received body chunk of {} bytes", chunk.len());
            handler.on_data(chunk);
        }

        Ok(body.trailers().await?)
    }

    fn build_request(&self, request: DispatchRequest) -> Result<Request<Body>, DispatchError> {
        let mut parts = self.origin.clone().into_parts();
        parts.path_and_query = Some(
            request
                .path
                .parse()
                .map_err(|e| DispatchError::InvalidRequest(format!("{}: {}", request.path, e)))?,
        );
        let uri = Uri::from_parts(parts).map_err(|e| DispatchError::InvalidRequest(e.to_string()))?;

        let mut builder = Request::builder().method(request.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers);
        }
        builder
            .body(Body::from(request.body))
            .map_err(|e| DispatchError::InvalidRequest(e.to_string()))
    }
}
