use std::time::Duration;

use hyper::Uri;

use crate::error::{BenchError, Result};
use crate::fixtures::{QUERY_VECTOR, SEARCHABLE_GROUPS};

/// Environment variable holding the optional API credential.
pub const API_KEY_ENV: &str = "QDRANT_API_KEY";

/// Upper bound on how long the service keeps an idle pooled connection.
/// The client side keep-alive must expire strictly before this.
pub const SERVER_IDLE_RECLAIM: Duration = Duration::from_secs(10);

/// Timing knobs for one search round trip and the pooled sockets behind it.
#[derive(Debug, Clone)]
pub struct TimeoutOptions {
    /// Deadline for a full request, from dispatch to decoded body.
    pub request_timeout: Duration,
    /// How long an idle pooled socket is kept before the client closes it.
    pub idle_timeout: Duration,
}

impl Default for TimeoutOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_millis(500),
            // The service reclaims idle connections after ~2s, stay below it.
            idle_timeout: Duration::from_millis(2_000),
        }
    }
}

/// Everything the benchmark needs, fixed before the first run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Scheme and authority of the search service.
    pub origin: Uri,
    pub collection: String,
    /// Tenant groups, one search per group in every batch.
    pub groups: Vec<String>,
    pub query: Vec<f64>,
    pub limit: u32,
    pub hnsw_ef: u32,
    pub with_payload: bool,
    pub runs: usize,
    pub timeout_options: TimeoutOptions,
    pub api_key: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            origin: Uri::from_static("http://localhost:6333"),
            collection: "staging-db".to_string(),
            groups: SEARCHABLE_GROUPS.iter().map(|g| g.to_string()).collect(),
            query: QUERY_VECTOR.to_vec(),
            limit: 10,
            hnsw_ef: 64,
            with_payload: true,
            runs: 100,
            timeout_options: TimeoutOptions::default(),
            api_key: None,
        }
    }
}

impl BenchConfig {
    /// Reference configuration with the credential taken from the environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Path of the batch query endpoint for the configured collection.
    pub fn batch_path(&self) -> String {
        format!("/collections/{}/points/query/batch", self.collection)
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig("run count must be positive".to_string()));
        }
        if self.groups.is_empty() {
            return Err(BenchError::InvalidConfig("no tenant groups configured".to_string()));
        }
        if self.limit == 0 {
            return Err(BenchError::InvalidConfig("limit must be positive".to_string()));
        }
        if self.query.is_empty() {
            return Err(BenchError::InvalidConfig("query vector is empty".to_string()));
        }
        if self.origin.scheme_str() != Some("http") || self.origin.authority().is_none() {
            return Err(BenchError::InvalidConfig(format!(
                "origin must be an http://host:port uri, got {}",
                self.origin
            )));
        }
        let idle = self.timeout_options.idle_timeout;
        if idle.is_zero() || idle >= SERVER_IDLE_RECLAIM {
            return Err(BenchError::InvalidConfig(format!(
                "keep-alive {:?} must be positive and shorter than the server reclaim interval {:?}",
                idle, SERVER_IDLE_RECLAIM
            )));
        }
        if self.timeout_options.request_timeout.is_zero() {
            return Err(BenchError::InvalidConfig("request timeout must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_reference_setup() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.runs, 100);
        assert_eq!(config.groups.len(), 4);
        assert_eq!(config.query.len(), 1024);
        assert_eq!(config.timeout_options.request_timeout, Duration::from_millis(500));
        assert_eq!(
            config.batch_path(),
            "/collections/staging-db/points/query/batch"
        );
    }

    #[test]
    fn test_keep_alive_must_undercut_server() {
        let mut config = BenchConfig::default();
        config.timeout_options.idle_timeout = SERVER_IDLE_RECLAIM;
        assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config = BenchConfig {
            runs: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_https_origin_rejected() {
        let config = BenchConfig {
            origin: Uri::from_static("https://localhost:6333"),
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
