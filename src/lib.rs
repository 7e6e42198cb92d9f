//! Load and reproduction client for a code execution service.
//!
//! The benchmark sends the same Java program many times through a bounded
//! pool of in-flight requests and summarizes throughput and latency.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod http;
pub mod logging;
pub mod stubs;


use std::sync::Arc;

use chrono::Utc;
use tokio::time::Instant;

use crate::{
    config::BenchmarkConfig,
    core::{
        domain::ExecutionRequest, payloads, pipeline::benchmarking::run_requests,
        report::BenchmarkReport, traits::client::ExecutionClient,
    },
    error::BenchError,
    http::client::HttpExecutionClient,
};

/// Runs the Java hello-world benchmark against `config.url`.
pub async fn run(config: &BenchmarkConfig) -> Result<BenchmarkReport, BenchError> {
    let client = HttpExecutionClient::new(&config.url)?;
    run_with_client(Arc::new(client), payloads::java_hello(), config).await
}

/// Runs a benchmark of `request` through an arbitrary client.
///
/// Failed requests never abort the run; only an invalid `config` does.
#[tracing::instrument(skip(client, request))]
pub async fn run_with_client(
    client: Arc<dyn ExecutionClient>,
    request: ExecutionRequest,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, BenchError> {
    // Single check for every entry point, done before the first request is sent
    config.validate()?;

    tracing::info!(
        url = %config.url,
        concurrency = config.concurrency,
        requests = config.total_requests,
        "Starting benchmark"
    );

    let started_at = Utc::now();
    let started = Instant::now();
    let results = run_requests(
        client,
        Arc::new(request),
        config.concurrency,
        config.total_requests,
    )
    .await;
    let report = BenchmarkReport::from_results(&results, started.elapsed(), started_at);

    tracing::info!(
        successes = report.successes,
        total = report.total_requests,
        elapsed_secs = report.total_time_secs,
        "Benchmark finished"
    );

    Ok(report)
}
