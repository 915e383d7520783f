//! Configuration validation

use super::*;
use crate::error::{EmbedError, Result};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_embedding_config(&config.embedding)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate embedding configuration
fn validate_embedding_config(config: &EmbeddingConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EmbedError::Config(
            "Base URL cannot be empty".to_string()
        ));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(EmbedError::Config(
            format!("Base URL must start with http:// or https://, got '{}'", config.base_url)
        ));
    }

    reqwest::Url::parse(&config.embed_url()).map_err(|e| {
        EmbedError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
    })?;

    if config.model.trim().is_empty() {
        return Err(EmbedError::Config(
            "Model name cannot be empty".to_string()
        ));
    }

    if config.timeout_secs == 0 {
        return Err(EmbedError::Config(
            "Timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if !LOG_LEVELS.contains(&config.level.to_lowercase().as_str()) {
        return Err(EmbedError::Config(
            format!("Invalid log level '{}' (expected one of: {})", config.level, LOG_LEVELS.join(", "))
        ));
    }

    Ok(())
}
