use crate::{
    constants::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS, DEFAULT_URL},
    error::BenchError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub url: String,
    /// Upper bound on requests in flight at the same time.
    pub concurrency: usize,
    pub total_requests: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            total_requests: DEFAULT_REQUESTS,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.concurrency == 0 {
            return Err(BenchError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.total_requests == 0 {
            return Err(BenchError::InvalidConfig(
                "requests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
