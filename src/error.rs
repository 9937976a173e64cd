use hyper::StatusCode;

/// Result type used across the benchmark harness.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Every way a single search round trip (or the setup around it) can fail.
///
/// None of these are retried. A failure aborts the benchmark loop and is
/// surfaced to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Socket level failure while the request was in flight.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request deadline elapsed before the response was assembled.
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(std::time::Duration),

    /// The compressed response body could not be inflated.
    #[error("Failed to decompress {encoding} response: {source}")]
    Decompression {
        encoding: String,
        #[source]
        source: std::io::Error,
    },

    /// The body was not the expected batch response document.
    #[error("Failed to parse JSON response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The service answered outside the 2xx range.
    #[error("Request failed with status {}: {body}", .status.as_u16())]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BenchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
