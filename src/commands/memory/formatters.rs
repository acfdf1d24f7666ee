//! Output formatting for memory commands.

use colored::Colorize;

use crate::fs::memory::{CheckReport, RollupOutcome};

pub const APPEND_USAGE: &str = "Usage: append \"what changed; why; verification; files\"";

pub const ROLLUP_USAGE: &str = "Usage: rollup [YYYY-MM]";

pub fn format_ensure_success(log_display: &str) -> String {
    format!("{} {}: {}", "[ensure]".bold(), "OK".green(), log_display)
}

/// `[check] OK`, or `[check] FAIL:` followed by one indented line per issue
pub fn format_check_report(report: &CheckReport) -> String {
    if report.is_ok() {
        return format!("{} {}", "[check]".bold(), "OK".green());
    }

    let mut output = format!("{} {}", "[check]".bold(), "FAIL:".red().bold());
    for issue in &report.issues {
        output.push_str(&format!("\n  - {issue}"));
    }
    output
}

pub fn format_append_success() -> String {
    format!("{} {}", "[append]".bold(), "OK".green())
}

pub fn format_rollup_outcome(outcome: &RollupOutcome) -> String {
    match outcome {
        RollupOutcome::NotNeeded {
            file_name,
            lines,
            limit,
        } => format!(
            "{} {}: {} has {} lines (<= {})",
            "[rollup]".bold(),
            "OK".green(),
            file_name.cyan(),
            lines,
            limit
        ),
        RollupOutcome::RolledUp {
            file_name,
            before,
            after,
        } => format!(
            "{} {} {}: {} -> {} lines",
            "[rollup]".bold(),
            "Rolled up".yellow(),
            file_name.cyan(),
            before,
            after
        ),
    }
}
