//! Embedding generation via the Ollama HTTP API

pub mod client;
pub mod models;

pub use client::OllamaClient;
pub use models::{EmbedRequest, EmbedResponse, ServiceError};

use async_trait::async_trait;
use crate::error::Result;

/// Trait for embedding providers
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Name of the model used for embedding
    fn model(&self) -> &str;
}
