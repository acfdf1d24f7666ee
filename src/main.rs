use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{dispatch, reject, Cli};

fn main() -> Result<ExitCode> {
    init_tracing();
    match Cli::try_parse() {
        Ok(cli) => dispatch(cli),
        Err(err) => Ok(reject(err)),
    }
}

/// Diagnostics go to stderr so stdout only carries command output.
/// Verbosity comes from `MEMROLL_LOG` (e.g. `MEMROLL_LOG=debug`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("MEMROLL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
