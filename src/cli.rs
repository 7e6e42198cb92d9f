use clap::{Parser, ValueEnum};

use crate::{
    config::BenchmarkConfig,
    constants::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS, DEFAULT_URL},
    core::{domain::ExecutionRequest, payloads},
};

/// Java benchmark against a code execution service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct BenchArgs {
    /// Server URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of concurrent requests
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Total number of requests
    #[arg(long, default_value_t = DEFAULT_REQUESTS)]
    pub requests: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&BenchArgs> for BenchmarkConfig {
    fn from(args: &BenchArgs) -> Self {
        BenchmarkConfig {
            url: args.url.clone(),
            concurrency: args.concurrency,
            total_requests: args.requests,
        }
    }
}

/// Send a single execution request and dump the response
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ReproArgs {
    /// Server URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Which built-in request to send
    #[arg(long, value_enum, default_value_t = PayloadKind::Hello)]
    pub payload: PayloadKind,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    /// Java hello world
    Hello,
    /// Java stdin greeting with two testcases
    Batch,
}

impl PayloadKind {
    pub fn request(self) -> ExecutionRequest {
        match self {
            PayloadKind::Hello => payloads::java_hello(),
            PayloadKind::Batch => payloads::java_greeting_batch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_defaults() {
        let args = BenchArgs::try_parse_from(["coderunner-bench"]).unwrap();
        let config = BenchmarkConfig::from(&args);

        assert_eq!(config, BenchmarkConfig::default());
        assert!(!args.json);
    }

    #[test]
    fn test_bench_flags() {
        let args = BenchArgs::try_parse_from([
            "coderunner-bench",
            "--url",
            "http://10.0.0.5:3000/api/v1/execute",
            "--concurrency",
            "4",
            "--requests",
            "100",
            "--json",
        ])
        .unwrap();
        let config = BenchmarkConfig::from(&args);

        assert_eq!(config.url, "http://10.0.0.5:3000/api/v1/execute");
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.total_requests, 100);
        assert!(args.json);
    }

    #[test]
    fn test_bench_rejects_negative_counts() {
        assert!(BenchArgs::try_parse_from(["coderunner-bench", "--requests", "-3"]).is_err());
    }

    #[test]
    fn test_repro_payloads() {
        let args = ReproArgs::try_parse_from(["repro"]).unwrap();
        assert_eq!(args.payload, PayloadKind::Hello);
        assert!(args.payload.request().testcases.is_none());

        let args = ReproArgs::try_parse_from(["repro", "--payload", "batch"]).unwrap();
        assert_eq!(args.payload, PayloadKind::Batch);
        assert_eq!(args.payload.request().testcases.map(|t| t.len()), Some(2));
    }
}
