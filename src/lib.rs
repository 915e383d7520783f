//! ollama-embed - embed a piece of text with a local Ollama server
//!
//! The crate backs the `ollama-embed` binary but can be used directly:
//!
//! ```rust,no_run
//! use ollama_embed::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = Config::load(&ConfigOverrides::default())?;
//!     let client = OllamaClient::new(config.embedding)?;
//!
//!     let vector = client.embed("The sky is blue because of Rayleigh scattering").await?;
//!     println!("{} dimensions", vector.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod output;
pub mod telemetry;

pub use config::Config;
pub use error::{EmbedError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigOverrides};
    pub use crate::embedding::{EmbeddingProvider, OllamaClient};
    pub use crate::error::{EmbedError, Result};
}
