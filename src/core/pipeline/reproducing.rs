use std::fmt;

use serde_json::Value;

use crate::core::{
    domain::ExecutionRequest,
    traits::client::{ClientError, ExecutionClient},
};

/// What came back from a single reproduction request.
#[derive(Clone, Debug)]
pub struct Reproduction {
    pub status_code: u16,
    /// Decoded regardless of status, since error payloads are what
    /// reproductions usually want to see.
    pub body: Result<Value, ClientError>,
}

/// Sends `request` once. Only transport failures are returned as errors.
#[tracing::instrument(skip(client, request))]
pub async fn reproduce(
    client: &dyn ExecutionClient,
    request: &ExecutionRequest,
) -> Result<Reproduction, ClientError> {
    let response = client.execute(request).await?;
    tracing::debug!(status_code = response.status_code, "Received response");

    Ok(Reproduction {
        status_code: response.status_code,
        body: response.json(),
    })
}

impl fmt::Display for Reproduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status Code: {}", self.status_code)?;
        writeln!(f, "Response JSON:")?;
        match &self.body {
            Ok(body) => {
                let pretty = serde_json::to_string_pretty(body).map_err(|_| fmt::Error)?;
                writeln!(f, "{}", pretty)
            }
            Err(err) => writeln!(f, "Error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        payloads,
        traits::client::{ExecutionResponse, MockExecutionClient},
    };

    #[tokio::test]
    async fn test_reproduce_prints_pretty_body() {
        let mut client = MockExecutionClient::new();
        client.expect_execute().times(1).return_const(Ok(ExecutionResponse {
            status_code: 200,
            body: r#"{"run":{"status":"SUCCESS"}}"#.to_string(),
        }));

        let reproduction = reproduce(&client, &payloads::java_hello()).await.unwrap();

        assert_eq!(reproduction.status_code, 200);
        assert_eq!(
            reproduction.to_string(),
            "Status Code: 200\nResponse JSON:\n{\n  \"run\": {\n    \"status\": \"SUCCESS\"\n  }\n}\n"
        );
    }

    #[tokio::test]
    async fn test_reproduce_decodes_error_statuses() {
        let mut client = MockExecutionClient::new();
        client.expect_execute().return_const(Ok(ExecutionResponse {
            status_code: 400,
            body: r#"{"error":"unknown language"}"#.to_string(),
        }));

        let reproduction = reproduce(&client, &payloads::java_greeting_batch())
            .await
            .unwrap();

        assert_eq!(reproduction.status_code, 400);
        assert_eq!(
            reproduction.body.unwrap()["error"],
            Value::from("unknown language")
        );
    }

    #[tokio::test]
    async fn test_reproduce_undecodable_body() {
        let mut client = MockExecutionClient::new();
        client.expect_execute().return_const(Ok(ExecutionResponse {
            status_code: 502,
            body: "Bad Gateway".to_string(),
        }));

        let reproduction = reproduce(&client, &payloads::java_hello()).await.unwrap();
        let text = reproduction.to_string();

        assert!(text.starts_with(
            "Status Code: 502\nResponse JSON:\nError: failed to decode response body"
        ));
    }

    #[tokio::test]
    async fn test_reproduce_transport_error() {
        let mut client = MockExecutionClient::new();
        client
            .expect_execute()
            .return_const(Err(ClientError::Transport {
                msg: "dns error".to_string(),
            }));

        let result = reproduce(&client, &payloads::java_hello()).await;

        assert_eq!(
            result.unwrap_err(),
            ClientError::Transport {
                msg: "dns error".to_string()
            }
        );
    }
}
