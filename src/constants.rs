pub const DEFAULT_URL: &str = "http://localhost:3000/api/v1/execute";
pub const DEFAULT_CONCURRENCY: usize = 20;
pub const DEFAULT_REQUESTS: usize = 50;

/// Values of `run.status` that count as a successful execution.
pub const ACCEPTED_RUN_STATUSES: [&str; 2] = ["Accepted", "SUCCESS"];

/// The p95 estimate needs at least this many successful samples.
pub const MIN_P95_SAMPLES: usize = 4;
