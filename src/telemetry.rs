//! Tracing setup. All log output goes to stderr so stdout carries only the embedding.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, before any work is done.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::new(config.level.to_lowercase());

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .json()
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact()
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}

/// Map a `-v` count onto a level name
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
