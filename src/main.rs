#![recursion_limit = "256"]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

/// Logs go to stderr so stdout carries only the `Accuracy:` line
/// and prediction output.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("perf_optimizer=info".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    Cli::parse().run()
}
