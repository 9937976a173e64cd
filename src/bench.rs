use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::client::SearchClient;
use crate::common::BenchConfig;
use crate::error::Result;
use crate::message::BatchRequest;

/// Wall clock duration of every completed run, in order.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResult {
    pub runs: Vec<Duration>,
}

impl BenchmarkResult {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn millis(d: &Duration) -> f64 {
        d.as_nanos() as f64 / 1_000_000.0
    }

    /// Arithmetic mean in milliseconds, `None` before the first run.
    pub fn mean_ms(&self) -> Option<f64> {
        if self.runs.is_empty() {
            return None;
        }
        let total: f64 = self.runs.iter().map(Self::millis).sum();
        Some(total / self.runs.len() as f64)
    }

    pub fn min_ms(&self) -> Option<f64> {
        self.runs.iter().min().map(Self::millis)
    }

    pub fn max_ms(&self) -> Option<f64> {
        self.runs.iter().max().map(Self::millis)
    }

    /// The one line summary printed at the end of a benchmark.
    pub fn summary(&self) -> String {
        format!(
            "Fast REST (gzip) perf avg over {} runs: {:.3} ms",
            self.runs.len(),
            self.mean_ms().unwrap_or_default()
        )
    }
}

/// Run `runs` sequential round trips of the same request body.
///
/// The first failure stops the loop and is returned as is.
pub async fn run_with(client: &SearchClient, body: Bytes, runs: usize) -> Result<BenchmarkResult> {
    let mut result = BenchmarkResult {
        runs: Vec::with_capacity(runs),
    };

    for i in 0..runs {
        let start = Instant::now();
        let searches = client.perform_search(body.clone()).await?;
        let elapsed = start.elapsed();
        debug!("Run {} finished in {:?} with {} result sets", i, elapsed, searches.len());
        result.runs.push(elapsed);
    }

    Ok(result)
}

/// Build the batch once from `config` and benchmark it.
pub async fn run(config: &BenchConfig) -> Result<BenchmarkResult> {
    config.validate()?;

    let batch = BatchRequest::from_config(config);
    let body = batch.to_body()?;
    let client = SearchClient::new(config)?;
    info!(
        "Benchmarking {} searches per batch ({} bytes) against {}{} for {} runs",
        batch.searches.len(),
        body.len(),
        config.origin,
        config.batch_path(),
        config.runs
    );

    let result = run_with(&client, body, config.runs).await?;
    info!(
        "Finished {} runs: min {:.3} ms, max {:.3} ms",
        result.len(),
        result.min_ms().unwrap_or_default(),
        result.max_ms().unwrap_or_default()
    );
    Ok(result)
}
