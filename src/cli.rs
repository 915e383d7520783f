//! Command-line interface

use crate::config::{Config, ConfigOverrides, LogFormat};
use crate::embedding::{EmbeddingProvider, OllamaClient};
use crate::error::Result;
use crate::output::format_embedding;
use crate::telemetry::level_for_verbosity;
use clap::Parser;
use tracing::debug;

/// Embed text with a local Ollama server and print the vector as JSON
#[derive(Debug, Parser)]
#[command(name = "ollama-embed", about, disable_version_flag = true)]
pub struct Cli {
    /// Text to embed
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Embedding model [default: mxbai-embed-large]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama server address [default: http://localhost:11434]
    #[arg(short = 'u', long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds [default: 60]
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Configuration overrides taken from the flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout,
            log_level: (self.verbose > 0).then(|| level_for_verbosity(self.verbose).to_string()),
            log_format: self.log_format,
        }
    }
}

/// Embed `text` with `provider` and render the vector for stdout
pub async fn embed_text<P>(provider: &P, text: &str) -> Result<String>
where
    P: EmbeddingProvider + ?Sized,
{
    debug!("Embedding {} chars with model {}", text.chars().count(), provider.model());
    let embedding = provider.embed(text).await?;
    format_embedding(&embedding)
}

/// Run one embedding against the configured Ollama server
pub async fn run(config: &Config, text: &str) -> Result<String> {
    let client = OllamaClient::new(config.embedding.clone())?;
    embed_text(&client, text).await
}
