use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;

use crate::{constants::MIN_P95_SAMPLES, core::domain::ExecutionResult};

/// Aggregate over all results of one benchmark run.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    pub started_at: DateTime<Utc>,
    pub total_requests: usize,
    pub successes: usize,
    pub total_time_secs: f64,
    pub throughput_rps: f64,
    /// Percentage in `0.0..=100.0`.
    pub success_rate: f64,
    /// Computed over successful requests only; `None` when nothing succeeded.
    pub latency: Option<LatencyStats>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatencyStats {
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub median_ms: f64,
    /// Only present with at least four samples.
    pub p95_ms: Option<f64>,
}

impl BenchmarkReport {
    pub fn from_results(
        results: &[ExecutionResult],
        elapsed: Duration,
        started_at: DateTime<Utc>,
    ) -> Self {
        let total_requests = results.len();
        let latencies: Vec<f64> = results
            .iter()
            .filter(|result| result.success)
            .map(|result| result.latency_ms)
            .collect();
        let successes = latencies.len();

        let total_time_secs = elapsed.as_secs_f64();
        let throughput_rps = if total_time_secs > 0.0 {
            total_requests as f64 / total_time_secs
        } else {
            0.0
        };
        let success_rate = if total_requests > 0 {
            successes as f64 / total_requests as f64 * 100.0
        } else {
            0.0
        };

        BenchmarkReport {
            started_at,
            total_requests,
            successes,
            total_time_secs,
            throughput_rps,
            success_rate,
            latency: LatencyStats::from_samples(&latencies),
        }
    }
}

impl LatencyStats {
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let sorted: Vec<f64> = samples.iter().copied().sorted_by(f64::total_cmp).collect();
        let p95_ms = if sorted.len() >= MIN_P95_SAMPLES {
            exclusive_quantiles(&sorted, 20).get(18).copied()
        } else {
            None
        };

        Some(LatencyStats {
            mean_ms: sorted.iter().sum::<f64>() / sorted.len() as f64,
            min_ms: sorted[0],
            max_ms: sorted[sorted.len() - 1],
            median_ms: median(&sorted),
            p95_ms,
        })
    }
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Cut points dividing `sorted` into `n` equal-probability intervals, using
/// the exclusive method (sample treated as drawn from a wider population,
/// positions `i * (len + 1) / n`, linear interpolation, clamped to the
/// outermost pair). Needs at least two samples.
fn exclusive_quantiles(sorted: &[f64], n: usize) -> Vec<f64> {
    if sorted.len() < 2 || n < 2 {
        return vec![];
    }

    let len = sorted.len() as i64;
    let n = n as i64;
    let m = len + 1;

    (1..n)
        .map(|i| {
            let j = (i * m / n).clamp(1, len - 1);
            let delta = i * m - j * n;
            let lower = sorted[(j - 1) as usize];
            let upper = sorted[j as usize];
            (lower * (n - delta) as f64 + upper * delta as f64) / n as f64
        })
        .collect()
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "  Total Time: {:.2}s", self.total_time_secs)?;
        writeln!(f, "  Throughput: {:.2} req/s", self.throughput_rps)?;
        writeln!(
            f,
            "  Success Rate: {}/{} ({:.1}%)",
            self.successes, self.total_requests, self.success_rate
        )?;

        if let Some(latency) = &self.latency {
            writeln!(f, "  Avg Latency: {:.2}ms", latency.mean_ms)?;
            writeln!(f, "  Min Latency: {:.2}ms", latency.min_ms)?;
            writeln!(f, "  Max Latency: {:.2}ms", latency.max_ms)?;
            writeln!(f, "  P50 Latency: {:.2}ms", latency.median_ms)?;
            if let Some(p95) = latency.p95_ms {
                writeln!(f, "  P95 Latency: {:.2}ms", p95)?;
            }
        }

        Ok(())
    }
}
