use serde_json::Value;
use thiserror::Error;

use crate::core::domain::ExecutionRequest;

#[mockall::automock]
#[async_trait::async_trait]
pub trait ExecutionClient: std::fmt::Debug + Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ClientError>;
}

/// Raw HTTP response of the execution service. The body is decoded lazily,
/// only when someone needs to look inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResponse {
    pub status_code: u16,
    pub body: String,
}

impl ExecutionResponse {
    pub fn json(&self) -> Result<Value, ClientError> {
        serde_json::from_str(&self.body).map_err(|err| ClientError::Decode {
            msg: err.to_string(),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("transport error: {msg}")]
    Transport { msg: String },
    #[error("failed to decode response body: {msg}")]
    Decode { msg: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode {
                msg: err.to_string(),
            }
        } else {
            ClientError::Transport {
                msg: err.to_string(),
            }
        }
    }
}
