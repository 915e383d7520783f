//! ollama-embed binary
//!
//! Prints the embedding of its argument as a JSON array on stdout. Every failure,
//! including a missing argument, exits with status 1.

use clap::{error::ErrorKind, Parser};
use ollama_embed::{cli::{self, Cli}, telemetry, Config};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => err.exit(),
            _ => {
                eprint!("{}", err.render());
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match Config::load(&args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init_tracing(&config.logging);
    debug!("Configuration resolved: {:?}", config);

    match cli::run(&config, &args.text).await {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
