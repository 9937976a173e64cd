use qdrant_rest_bench::{bench, common::BenchConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::from_env();
    let result = bench::run(&config).await?;
    println!("{}", result.summary());
    Ok(())
}
