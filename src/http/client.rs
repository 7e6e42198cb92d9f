use async_trait::async_trait;

use crate::core::{
    domain::ExecutionRequest,
    traits::client::{ClientError, ExecutionClient, ExecutionResponse},
};

/// Posts execution requests as JSON to a fixed endpoint.
///
/// No timeout is configured: a request waits until the service answers or
/// the connection fails.
#[derive(Debug, Clone)]
pub struct HttpExecutionClient {
    client: reqwest::Client,
    url: String,
}

impl HttpExecutionClient {
    pub fn new(url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ExecutionClient for HttpExecutionClient {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ClientError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        Ok(ExecutionResponse { status_code, body })
    }
}
