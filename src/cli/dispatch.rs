use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::CommandFactory;
use memroll::commands::{memory, CommandStatus};
use memroll::config::MemoryConfig;
use std::env;
use std::process::ExitCode;

use super::types::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let command = match cli.command.as_deref().map(str::parse::<Command>) {
        None => Command::Help,
        Some(Ok(command)) => command,
        Some(Err(unknown)) => return Ok(unknown_command(&unknown)),
    };

    let status = match command {
        Command::Help => {
            print_help();
            CommandStatus::Success
        }
        Command::Ensure => {
            let (config, today) = load_context(&cli)?;
            memory::ensure(&config, today)?
        }
        Command::Check => {
            let (config, today) = load_context(&cli)?;
            memory::check(&config, today)?
        }
        Command::Append => {
            let (config, today) = load_context(&cli)?;
            memory::append(&config, today, &cli.args)?
        }
        Command::Rollup => {
            let (config, today) = load_context(&cli)?;
            memory::rollup(&config, today, &cli.args)?
        }
    };

    Ok(status.into())
}

/// Handle a command line clap rejected. An unrecognized option in command
/// position is reported like any other unknown command; everything else
/// gets clap's own message and exit status.
pub fn reject(err: clap::Error) -> ExitCode {
    match unknown_argument(&err) {
        Some(unknown) => unknown_command(&unknown),
        None => err.exit(),
    }
}

fn unknown_argument(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.to_lowercase()),
        _ => None,
    }
}

fn unknown_command(name: &str) -> ExitCode {
    println!("Unknown command: {name}");
    print_help();
    CommandStatus::Usage.into()
}

/// Resolve settings for the project root and the reference date. The wall
/// clock is only read here.
fn load_context(cli: &Cli) -> Result<(MemoryConfig, NaiveDate)> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let config = MemoryConfig::load(&root, cli.config.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(root = %root.display(), %today, "memory context resolved");

    Ok((config, today))
}

fn print_help() {
    println!("{}", Cli::command().render_help());
}
