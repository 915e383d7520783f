//! Wire models for the Ollama `/api/embed` endpoint

use crate::error::{EmbedError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `/api/embed`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedRequest {
    /// Model name
    pub model: String,

    /// Text to embed
    pub input: String,
}

impl EmbedRequest {
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }
}

/// Response from `/api/embed`.
///
/// Only `embeddings[0]` is decoded into numbers. The remaining vectors and the
/// metadata fields are kept as raw JSON so unexpected shapes there never fail a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedResponse {
    /// One vector per input
    pub embeddings: Vec<Value>,

    /// Model that produced the vectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,

    /// Total time spent generating, in nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<Value>,

    /// Time spent loading the model, in nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_duration: Option<Value>,

    /// Number of input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<Value>,
}

impl EmbedResponse {
    /// Decode the first embedding
    pub fn first_embedding(self) -> Result<Vec<f64>> {
        let first = self
            .embeddings
            .into_iter()
            .next()
            .ok_or(EmbedError::EmptyResponse)?;

        serde_json::from_value(first).map_err(EmbedError::Decode)
    }

    /// Model name, when the service reported one as a string
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_ref().and_then(Value::as_str)
    }

    /// Generation and load time in milliseconds plus prompt token count, where reported as integers
    pub fn timings(&self) -> (Option<u64>, Option<u64>, Option<u64>) {
        let millis = |v: &Option<Value>| v.as_ref().and_then(Value::as_u64).map(|ns| ns / 1_000_000);

        (
            millis(&self.total_duration),
            millis(&self.load_duration),
            self.prompt_eval_count.as_ref().and_then(Value::as_u64),
        )
    }
}

/// Error body Ollama sends alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    pub error: String,
}
