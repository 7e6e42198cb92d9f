use serde_json::Value;

use crate::{
    constants::ACCEPTED_RUN_STATUSES,
    core::traits::client::{ClientError, ExecutionResponse},
};

/// Whether a decoded response counts as a successful execution.
///
/// A missing or non-string `run.status` is treated as a rejection.
pub fn is_accepted(status_code: u16, body: &Value) -> bool {
    status_code == 200
        && body
            .pointer("/run/status")
            .and_then(Value::as_str)
            .is_some_and(|status| ACCEPTED_RUN_STATUSES.contains(&status))
}

/// Classifies a raw response. The body is only decoded for HTTP 200, so a
/// garbled error page never turns into a decode failure.
pub fn classify(response: &ExecutionResponse) -> Result<bool, ClientError> {
    if response.status_code != 200 {
        return Ok(false);
    }
    let body = response.json()?;
    Ok(is_accepted(response.status_code, &body))
}
