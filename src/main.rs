//! update-issues CLI entry point

mod cli;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::run_update(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("One or more issues failed to process");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e.chain_message());
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,update_issues={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
