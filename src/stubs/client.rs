use std::time::Duration;

use crate::core::{
    domain::ExecutionRequest,
    traits::client::{ClientError, ExecutionClient, ExecutionResponse},
};

/// Answers every request with the same canned result after a fixed delay.
#[derive(Debug, Clone)]
pub struct ExecutionClientStub {
    result: Result<ExecutionResponse, ClientError>,
    delay: Duration,
}

impl ExecutionClientStub {
    pub fn new(result: Result<ExecutionResponse, ClientError>, delay: Duration) -> Self {
        Self { result, delay }
    }
}

#[async_trait::async_trait]
impl ExecutionClient for ExecutionClientStub {
    #[tracing::instrument(skip(request))]
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ClientError> {
        tracing::debug!(
            "Start execution: language={:?}, version={:?}",
            request.language,
            request.version
        );
        tokio::time::sleep(self.delay).await;
        tracing::debug!("Execution result: {:?}", self.result);

        self.result.clone()
    }
}
