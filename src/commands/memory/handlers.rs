//! Command handler implementations for the memory commands.

use anyhow::Result;
use chrono::NaiveDate;

use crate::commands::CommandStatus;
use crate::config::MemoryConfig;
use crate::fs::memory::{append_entry, check_index, ensure_files, rollup_month, MonthKey};
use crate::validation::validate_entry_text;

use super::formatters::{
    format_append_success, format_check_report, format_ensure_success, format_rollup_outcome,
    APPEND_USAGE, ROLLUP_USAGE,
};

/// Create any missing memory files and report this month's log
pub fn ensure(config: &MemoryConfig, today: NaiveDate) -> Result<CommandStatus> {
    let log_path = ensure_files(config, today)?;
    println!(
        "{}",
        format_ensure_success(&config.layout.display_path(&log_path))
    );
    Ok(CommandStatus::Success)
}

/// Check the index file against its size and content policy
pub fn check(config: &MemoryConfig, today: NaiveDate) -> Result<CommandStatus> {
    ensure_files(config, today)?;
    let report = check_index(config)?;
    println!("{}", format_check_report(&report));

    if report.is_ok() {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::PolicyFailure)
    }
}

/// Append a dated entry built from `words` joined with single spaces
pub fn append(config: &MemoryConfig, today: NaiveDate, words: &[String]) -> Result<CommandStatus> {
    let text = words.join(" ");
    if validate_entry_text(&text).is_err() {
        println!("{APPEND_USAGE}");
        return Ok(CommandStatus::Usage);
    }

    append_entry(config, today, &text)?;
    println!("{}", format_append_success());
    Ok(CommandStatus::Success)
}

/// Roll up this month's log, or the month named in `args`
pub fn rollup(config: &MemoryConfig, today: NaiveDate, args: &[String]) -> Result<CommandStatus> {
    let month = match args {
        [] => None,
        [month] => match month.parse::<MonthKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                println!("{e}");
                println!("{ROLLUP_USAGE}");
                return Ok(CommandStatus::Usage);
            }
        },
        _ => {
            println!("{ROLLUP_USAGE}");
            return Ok(CommandStatus::Usage);
        }
    };

    let outcome = rollup_month(config, today, month)?;
    println!("{}", format_rollup_outcome(&outcome));
    Ok(CommandStatus::Success)
}
