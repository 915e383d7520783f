//! Embedding client for the Ollama `/api/embed` endpoint

use super::{EmbeddingProvider, models::*};
use crate::config::EmbeddingConfig;
use crate::error::{EmbedError, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::Duration;
use tracing::{debug, info};

/// Client for generating embeddings with a local Ollama server
pub struct OllamaClient {
    config: EmbeddingConfig,
    url: String,
    http_client: Client,
}

impl OllamaClient {
    /// Create a new embedding client
    pub fn new(config: EmbeddingConfig) -> Result<Self> {
        // One request per process, nothing to keep alive afterwards
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(EmbedError::Network)?;

        Self::with_http_client(config, http_client)
    }

    /// Create client with custom HTTP client
    pub fn with_http_client(config: EmbeddingConfig, http_client: Client) -> Result<Self> {
        let url = config.embed_url();
        debug!("Embedding client targets {} with model {}", url, config.model);

        Ok(Self {
            config,
            url,
            http_client,
        })
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a single embed request and decode the response
    async fn make_request(&self, request: &EmbedRequest) -> Result<EmbedResponse> {
        let timeout_secs = self.config.timeout_secs;
        debug!("POST {} ({} bytes of input)", self.url, request.input.len());

        let response = self.http_client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| EmbedError::from_transport(e, timeout_secs))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| EmbedError::from_transport(e, timeout_secs))?;

        if !status.is_success() {
            let message = service_error_message(&body);
            debug!("Embedding service error {}: {}", status, message);
            return Err(EmbedError::Status { status, message });
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!("Failed to parse embedding response: {}", e);
            EmbedError::Decode(e)
        })
    }
}

/// Pull the message out of an Ollama error body, falling back to the raw text
fn service_error_message(body: &[u8]) -> String {
    if let Ok(err) = serde_json::from_slice::<ServiceError>(body) {
        return err.error;
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        "empty response body".to_string()
    } else {
        text
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let request = EmbedRequest::new(self.config.model.as_str(), text);
        let response = self.make_request(&request).await?;

        if let (Some(total_ms), load_ms, prompt_tokens) = response.timings() {
            debug!(
                "Ollama took {}ms (load {}ms, {} prompt tokens) with model {}",
                total_ms,
                load_ms.unwrap_or(0),
                prompt_tokens.unwrap_or(0),
                response.model_name().unwrap_or("unknown"),
            );
        }

        let count = response.embeddings.len();
        let embedding = response.first_embedding()?;

        info!(
            "Received {} embedding(s), using first with {} dimensions",
            count,
            embedding.len()
        );

        Ok(embedding)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_config(base_url: String) -> EmbeddingConfig {
        EmbeddingConfig {
            base_url,
            model: "mxbai-embed-large".to_string(),
            timeout_secs: 60,
        }
    }

    #[test]
    fn test_url_construction() {
        let client = OllamaClient::new(test_config("http://localhost:11434/".to_string())).unwrap();

        assert_eq!(client.url(), "http://localhost:11434/api/embed");
        assert_eq!(client.model(), "mxbai-embed-large");
    }

    #[test]
    fn test_service_error_message() {
        assert_eq!(service_error_message(br#"{"error":"model not found"}"#), "model not found");
        assert_eq!(service_error_message(b"  upstream exploded \n"), "upstream exploded");
        assert_eq!(service_error_message(b""), "empty response body");
    }

    #[tokio::test]
    async fn test_embed_returns_first_vector() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/embed")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"model": "mxbai-embed-large", "input": "hello"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"mxbai-embed-large","embeddings":[[0.1,0.2,0.3],[9.0]]}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let embedding = client.embed("hello").await.unwrap();

        assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_embed_sends_configured_model() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/embed")
            .match_body(Matcher::Json(json!({"model": "nomic-embed-text", "input": "x"})))
            .with_status(200)
            .with_body(r#"{"embeddings":[[1.0]]}"#)
            .create_async()
            .await;

        let mut config = test_config(server.url());
        config.model = "nomic-embed-text".to_string();

        let client = OllamaClient::new(config).unwrap();
        assert_eq!(client.embed("x").await.unwrap(), vec![1.0]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(500)
            .with_body("internal failure")
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        match err {
            EmbedError::Status { status, message } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(message, "internal failure");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_model_not_found_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(404)
            .with_body(r#"{"error":"model \"nope\" not found, try pulling it first"}"#)
            .create_async()
            .await;

        let mut config = test_config(server.url());
        config.model = "nope".to_string();

        let client = OllamaClient::new(config).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::Status { .. }));
        assert!(err.to_string().contains("model \"nope\" not found"));
    }

    #[tokio::test]
    async fn test_missing_embeddings_key() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(200)
            .with_body(r#"{"model":"mxbai-embed-large"}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unexpected_metadata_does_not_fail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(200)
            .with_body(r#"{"embeddings":[[1,2],["ignored"]],"total_duration":1.5,"model":null}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let embedding = client.embed("hello").await.unwrap();

        assert_eq!(embedding, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_embeddings() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/embed")
            .with_status(200)
            .with_body(r#"{"embeddings":[]}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(test_config(server.url())).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_timeout() {
        // Accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let mut config = test_config(format!("http://{addr}"));
        config.timeout_secs = 1;

        let client = OllamaClient::new(config).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::Timeout(1)));
        assert_eq!(err.to_string(), "Request timed out after 1 seconds");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Grab a free port, then close it so nothing is listening
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = OllamaClient::new(test_config(format!("http://{addr}"))).unwrap();
        let err = client.embed("hello").await.unwrap_err();

        assert!(matches!(err, EmbedError::Network(_)));
    }
}
