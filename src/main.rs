mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // RUST_LOG overrides the default; logs go to stderr so stdout
    // only carries results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("armenian_g2p=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("An unexpected error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}
