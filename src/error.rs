use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
