//! Configuration for the embedding client

use serde::{Deserialize, Serialize};

pub mod loader;
pub mod validation;

pub use loader::ConfigOverrides;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub logging: LoggingConfig,
}

/// Configuration for the Ollama embedding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the Ollama server, without the `/api/embed` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Embedding model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EmbeddingConfig {
    /// Full URL of the embed endpoint
    pub fn embed_url(&self) -> String {
        format!("{}/api/embed", self.base_url.trim_end_matches('/'))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default)]
    pub format: LogFormat,
}

/// Output formats for log lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String { "http://localhost:11434".to_string() }
pub(crate) fn default_model() -> String { "mxbai-embed-large".to_string() }
pub(crate) fn default_timeout() -> u64 { 60 }
pub(crate) fn default_log_level() -> String { "warn".to_string() }

impl Config {
    /// Build configuration from defaults plus command-line overrides
    pub fn load(overrides: &ConfigOverrides) -> crate::error::Result<Self> {
        let config = loader::load_config(overrides)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            embedding: EmbeddingConfig {
                base_url: default_base_url(),
                model: default_model(),
                timeout_secs: default_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: LogFormat::default(),
            },
        }
    }
}
