use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::common::BenchConfig;
use crate::error::{BenchError, Result};
use crate::fixtures::GROUP_KEY;

/// The Encode trait is used to encode a data structure into a request body.
pub trait Encode {
    fn encode(&self) -> Result<Vec<u8>>;
}

/// The Decode trait is used to decode a response body into a data structure.
pub trait Decode {
    fn decode(buf: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// One search inside a batch, restricted to a single tenant group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    /// The query vector, shared by every search of the batch.
    pub query: Arc<[f64]>,
    /// Maximum number of points returned.
    pub limit: u32,
    /// Tenant restriction.
    pub filter: Filter,
    pub with_payload: bool,
    /// Search quality parameters.
    pub params: SearchParams,
}

/// Conjunction of field conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub must: Vec<FieldCondition>,
}

/// Equality predicate on a payload key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCondition {
    pub key: String,
    #[serde(rename = "match")]
    pub matches: MatchValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchValue {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchParams {
    /// Breadth of the HNSW graph traversal.
    pub hnsw_ef: u32,
}

impl Filter {
    /// Filter matching points whose `key` payload equals `value`.
    pub fn tenant(key: &str, value: &str) -> Self {
        Self {
            must: vec![FieldCondition {
                key: key.to_string(),
                matches: MatchValue {
                    value: value.to_string(),
                },
            }],
        }
    }
}

/// The batch query request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub searches: Vec<SearchQuery>,
}

impl BatchRequest {
    /// Build one search per tenant group, all sharing the same query vector.
    pub fn build<S: AsRef<str>>(
        query: Arc<[f64]>,
        groups: &[S],
        limit: u32,
        with_payload: bool,
        params: SearchParams,
    ) -> Self {
        let searches = groups
            .iter()
            .map(|group| SearchQuery {
                query: query.clone(),
                limit,
                filter: Filter::tenant(GROUP_KEY, group.as_ref()),
                with_payload,
                params,
            })
            .collect();
        Self { searches }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::build(
            Arc::from(config.query.as_slice()),
            &config.groups,
            config.limit,
            config.with_payload,
            SearchParams {
                hnsw_ef: config.hnsw_ef,
            },
        )
    }

    /// Serialize once into a shareable body that every run reuses.
    pub fn to_body(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.encode()?))
    }
}

impl Encode for BatchRequest {
    fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| BenchError::InvalidRequest(e.to_string()))
    }
}

/// The batch query response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchResponse {
    /// One entry per search, in request order.
    pub result: Vec<QueryResponse>,
    #[serde(default)]
    pub status: Option<String>,
    /// Server side processing time in seconds.
    #[serde(default)]
    pub time: Option<f64>,
}

impl Decode for BatchResponse {
    fn decode(buf: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(buf)?)
    }
}

/// Result of one search of the batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub points: Vec<ScoredPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoredPoint {
    pub id: PointId,
    #[serde(default)]
    pub version: u64,
    pub score: f64,
    #[serde(default)]
    pub payload: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub vector: Option<serde_json::Value>,
}

/// Point identifiers are either unsigned integers or UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{QUERY_VECTOR, SEARCHABLE_GROUPS};

    fn reference_batch() -> BatchRequest {
        BatchRequest::build(
            Arc::from(&QUERY_VECTOR[..]),
            &SEARCHABLE_GROUPS,
            10,
            true,
            SearchParams { hnsw_ef: 64 },
        )
    }

    #[test]
    fn test_one_search_per_group() {
        let batch = reference_batch();
        assert_eq!(batch.searches.len(), 4);

        let tenants: Vec<&str> = batch
            .searches
            .iter()
            .map(|s| s.filter.must[0].matches.value.as_str())
            .collect();
        assert_eq!(tenants, SEARCHABLE_GROUPS);

        for search in &batch.searches {
            assert_eq!(search.limit, 10);
            assert_eq!(search.query.len(), 1024);
            assert!(Arc::ptr_eq(&search.query, &batch.searches[0].query));
            assert_eq!(search.filter.must[0].key, GROUP_KEY);
        }
    }

    #[test]
    fn test_encoding_is_stable() {
        let batch = reference_batch();
        assert_eq!(batch.encode().unwrap(), batch.encode().unwrap());
        assert_eq!(batch.to_body().unwrap(), batch.to_body().unwrap());
    }

    #[test]
    fn test_wire_shape() {
        let batch = BatchRequest::build(
            Arc::from(&[1.0, 2.5][..]),
            &["main"],
            3,
            false,
            SearchParams { hnsw_ef: 16 },
        );
        let value: serde_json::Value = serde_json::from_slice(&batch.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "searches": [{
                    "query": [1.0, 2.5],
                    "limit": 3,
                    "filter": { "must": [{ "key": "groupId", "match": { "value": "main" } }] },
                    "with_payload": false,
                    "params": { "hnsw_ef": 16 }
                }]
            })
        );
    }

    #[test]
    fn test_decode_points() {
        let body = br#"{
            "result": [
                { "points": [
                    { "id": 7, "version": 2, "score": 0.91, "payload": { "groupId": "main" } },
                    { "id": "6f1c1e8a-4b8e-4a43-9b0a-3d2f7c1e9a10", "score": 0.5 }
                ] },
                { "points": [] }
            ],
            "status": "ok",
            "time": 0.0012
        }"#;
        let resp = BatchResponse::decode(body).unwrap();
        assert_eq!(resp.result.len(), 2);
        assert_eq!(resp.result[0].points[0].id, PointId::Num(7));
        assert!(matches!(resp.result[0].points[1].id, PointId::Uuid(_)));
        assert!(resp.result[1].points.is_empty());
        assert_eq!(resp.status.as_deref(), Some("ok"));
    }

    #[test]
    fn test_decode_requires_result() {
        assert!(BatchResponse::decode(br#"{"status":"ok"}"#).is_err());
    }
}
