use chrono::NaiveDate;
use clap::Parser;
use memroll::validation::clap_date_validator;
use std::path::PathBuf;
use std::str::FromStr;

const HELP_TEMPLATE: &str = "\
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

const AFTER_HELP: &str = "\
Commands:
  ensure              Create memory.md, tasks.md, decisions.md and this month's log if missing
  check               Check that memory.md stays an index + snapshot (size, forbidden sections)
  append <TEXT>...    Append a dated entry to this month's log
                      (e.g. \"what changed; why; verification; files\")
  rollup [YYYY-MM]    Roll up this month's log (or the given month) once it is oversized
  help                Show this help

Files (relative to the project root):
  memory.md                              Index + snapshot only (small)
  tasks.md                               Active tasks only
  decisions.md                           Durable decisions only
  memory/archive/memory-log-YYYY-MM.md   Append-only monthly logs

Limits and paths can be overridden in memroll.toml at the project root.";

#[derive(Parser)]
#[command(name = "memroll")]
#[command(about = "Keep project memory notes small: templated index, tasks and decisions files plus rolled-up monthly logs", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Project root holding the memory files (defaults to the current directory)
    #[arg(long, env = "MEMROLL_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file (defaults to <root>/memroll.toml when present)
    #[arg(long, env = "MEMROLL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference date used instead of today's date
    #[arg(long, hide = true, value_name = "YYYY-MM-DD", value_parser = clap_date_validator)]
    pub today: Option<NaiveDate>,

    /// Command to run (ensure, check, append, rollup, help)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Arguments for the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A command name, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ensure,
    Check,
    Append,
    Rollup,
    Help,
}

impl FromStr for Command {
    /// The lower-cased name that was not recognized
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ensure" => Ok(Command::Ensure),
            "check" => Ok(Command::Check),
            "append" => Ok(Command::Append),
            "rollup" => Ok(Command::Rollup),
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => Err(other.to_string()),
        }
    }
}
