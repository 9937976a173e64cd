use std::io::Read;

use flate2::read::{GzDecoder, ZlibDecoder};
use hyper::header::{HeaderMap, CONTENT_ENCODING};
use hyper::StatusCode;
use tracing::debug;

use crate::error::{BenchError, Result};
use crate::message::{BatchResponse, Decode, QueryResponse};

/// Content coding declared by the response headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentEncoding {
    #[default]
    Identity,
    Gzip,
    Deflate,
    Unsupported(String),
}

impl ContentEncoding {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("identity") {
            Self::Identity
        } else if value.eq_ignore_ascii_case("gzip") || value.eq_ignore_ascii_case("x-gzip") {
            Self::Gzip
        } else if value.eq_ignore_ascii_case("deflate") {
            Self::Deflate
        } else {
            Self::Unsupported(value.to_string())
        }
    }

    /// Read the coding a server actually applied, regardless of what was asked for.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match headers.get(CONTENT_ENCODING).map(|v| v.to_str()) {
            None => Self::Identity,
            Some(Ok(value)) => Self::parse(value),
            Some(Err(_)) => Self::Unsupported("<non-ascii>".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Identity => "identity",
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
            Self::Unsupported(name) => name,
        }
    }

    /// Undo the coding. Identity bodies are returned as they are.
    pub fn decompress(&self, raw: Vec<u8>) -> Result<Vec<u8>> {
        let inflated = match self {
            Self::Identity => return Ok(raw),
            Self::Gzip => inflate(GzDecoder::new(raw.as_slice())),
            Self::Deflate => inflate(ZlibDecoder::new(raw.as_slice())),
            Self::Unsupported(name) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unsupported content encoding {name}"),
            )),
        };
        match inflated {
            Ok(out) => {
                debug!("Inflated {} {} bytes into {}", self.as_str(), raw.len(), out.len());
                Ok(out)
            }
            Err(source) => Err(BenchError::Decompression {
                encoding: self.as_str().to_string(),
                source,
            }),
        }
    }
}

fn inflate<R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    reader.read_to_end(&mut out)?;
    Ok(out)
}

/// Turn an assembled response body into the per-search results.
///
/// Decompression happens first, so an error body from the service is reported
/// as readable text. The status is checked before parsing and a non 2xx answer
/// carries the raw body for diagnosis.
pub fn decode(raw: Vec<u8>, status: StatusCode, encoding: &ContentEncoding) -> Result<Vec<QueryResponse>> {
    let body = encoding.decompress(raw)?;

    if !status.is_success() {
        return Err(BenchError::UpstreamStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let text = String::from_utf8_lossy(&body);
    let response = BatchResponse::decode(text.as_bytes())?;
    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::{GzEncoder, ZlibEncoder};
    use flate2::Compression;
    use hyper::header::HeaderValue;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_gzip_empty_result() {
        let raw = gzip(br#"{ "result": [] }"#);
        let result = decode(raw, StatusCode::OK, &ContentEncoding::Gzip).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_identity_body_passes_through() {
        let raw = br#"{"result":[{"points":[]}],"status":"ok","time":0.001}"#.to_vec();
        let result = decode(raw, StatusCode::OK, &ContentEncoding::Identity).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_deflate_body() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(br#"{"result":[]}"#).unwrap();
        let raw = encoder.finish().unwrap();
        assert!(decode(raw, StatusCode::OK, &ContentEncoding::Deflate).unwrap().is_empty());
    }

    #[test]
    fn test_upstream_error_keeps_body() {
        let err = decode(b"boom".to_vec(), StatusCode::INTERNAL_SERVER_ERROR, &ContentEncoding::Identity)
            .unwrap_err();
        match &err {
            BenchError::UpstreamStatus { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_compressed_upstream_error_is_readable() {
        let raw = gzip(b"boom");
        let err = decode(raw, StatusCode::INTERNAL_SERVER_ERROR, &ContentEncoding::Gzip).unwrap_err();
        assert!(matches!(err, BenchError::UpstreamStatus { ref body, .. } if body == "boom"));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = decode(b"<html>".to_vec(), StatusCode::OK, &ContentEncoding::Identity).unwrap_err();
        assert!(matches!(err, BenchError::MalformedResponse(_)));
    }

    #[test]
    fn test_corrupt_gzip_is_decompression_error() {
        let err = decode(b"not gzip at all".to_vec(), StatusCode::OK, &ContentEncoding::Gzip).unwrap_err();
        assert!(matches!(err, BenchError::Decompression { ref encoding, .. } if encoding == "gzip"));
    }

    #[test]
    fn test_unknown_coding_is_decompression_error() {
        let encoding = ContentEncoding::parse("br");
        assert_eq!(encoding, ContentEncoding::Unsupported("br".to_string()));
        let err = decode(b"{}".to_vec(), StatusCode::OK, &encoding).unwrap_err();
        assert!(matches!(err, BenchError::Decompression { .. }));
    }

    #[test]
    fn test_encoding_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(ContentEncoding::from_headers(&headers), ContentEncoding::Identity);
        headers.insert(CONTENT_ENCODING, HeaderValue::from_static("GZIP"));
        assert_eq!(ContentEncoding::from_headers(&headers), ContentEncoding::Gzip);
    }
}
