use futures::stream::FuturesUnordered;
use std::sync::Arc;
use tokio::time::Instant;
use tokio_stream::StreamExt;

use crate::core::{
    domain::{ExecutionRequest, ExecutionResult},
    traits::client::ExecutionClient,
    verdict,
};

/// Sends `total_requests` copies of `request`, keeping at most `concurrency`
/// of them in flight. Results come back in completion order.
#[tracing::instrument(skip(client, request))]
pub async fn run_requests(
    client: Arc<dyn ExecutionClient>,
    request: Arc<ExecutionRequest>,
    concurrency: usize,
    total_requests: usize,
) -> Vec<ExecutionResult> {
    let mut results = Vec::with_capacity(total_requests);
    let mut queued = 0..total_requests;
    let mut in_flight = FuturesUnordered::new();

    for request_idx in queued.by_ref().take(concurrency) {
        in_flight.push(execute_one(client.clone(), request.clone(), request_idx));
    }

    // Each completion frees exactly one slot for the next queued request
    while let Some(result) = in_flight.next().await {
        results.push(result);
        if let Some(request_idx) = queued.next() {
            in_flight.push(execute_one(client.clone(), request.clone(), request_idx));
        }
    }

    results
}

/// Performs one request and turns whatever happened into an [`ExecutionResult`].
async fn execute_one(
    client: Arc<dyn ExecutionClient>,
    request: Arc<ExecutionRequest>,
    request_idx: usize,
) -> ExecutionResult {
    let started = Instant::now();
    let response = client.execute(&request).await;
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    let outcome = response.and_then(|response| {
        verdict::classify(&response).map(|success| (response.status_code, success))
    });

    match outcome {
        Ok((status_code, success)) => {
            if success {
                tracing::debug!(request_idx, status_code, latency_ms, "Request completed");
            } else {
                tracing::warn!(request_idx, status_code, latency_ms, "Request rejected");
            }
            ExecutionResult::completed(status_code, latency_ms, success)
        }
        Err(err) => {
            tracing::warn!(request_idx, latency_ms, error = %err, "Request failed");
            ExecutionResult::failed(latency_ms, err.to_string())
        }
    }
}
