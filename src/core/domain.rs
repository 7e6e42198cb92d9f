use serde::Serialize;

/// Body of a single `POST` to the execution service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testcases: Option<Vec<Testcase>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
    pub encoding: String,
}

impl SourceFile {
    pub fn utf8(name: &str, content: &str) -> Self {
        SourceFile {
            name: name.to_string(),
            content: content.to_string(),
            encoding: "utf8".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Testcase {
    pub id: String,
    pub input: String,
    pub expected_output: String,
}

impl Testcase {
    pub fn new(id: &str, input: &str, expected_output: &str) -> Self {
        Testcase {
            id: id.to_string(),
            input: input.to_string(),
            expected_output: expected_output.to_string(),
        }
    }
}

/// Outcome of one benchmark request.
///
/// `status_code` is `-1` when no HTTP response could be used (connection
/// failure, timeout, undecodable body); `error` then holds the description.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResult {
    pub status_code: i32,
    pub latency_ms: f64,
    pub success: bool,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub const TRANSPORT_FAILURE: i32 = -1;

    pub fn completed(status_code: u16, latency_ms: f64, success: bool) -> Self {
        ExecutionResult {
            status_code: i32::from(status_code),
            latency_ms,
            success,
            error: None,
        }
    }

    pub fn failed(latency_ms: f64, error: String) -> Self {
        ExecutionResult {
            status_code: Self::TRANSPORT_FAILURE,
            latency_ms,
            success: false,
            error: Some(error),
        }
    }
}
