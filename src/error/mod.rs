//! Error types for the embedding client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for embedding operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Everything that can go wrong between reading the arguments and printing the vector
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Embedding service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid response from embedding service: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Embedding service returned no embeddings")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render embedding: {0}")]
    Output(#[source] serde_json::Error),
}

impl EmbedError {
    /// Classify a transport error, pulling timeouts out into their own variant
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            EmbedError::Timeout(timeout_secs)
        } else {
            EmbedError::Network(err)
        }
    }
}

impl From<config::ConfigError> for EmbedError {
    fn from(err: config::ConfigError) -> Self {
        EmbedError::Config(err.to_string())
    }
}
