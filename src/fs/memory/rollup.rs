//! Rollup of oversized monthly logs.
//!
//! A log over the line limit is replaced by a short summary (heading and
//! bullet counts) followed by the last lines of the original. Everything
//! before that tail is discarded.

use super::ensure::ensure_files;
use super::month::MonthKey;
use super::templates::monthly_log_title;
use crate::config::MemoryConfig;
use crate::fs::locking::locked_update;
use anyhow::{bail, Result};
use chrono::NaiveDate;

/// Lines in the summary written above the preserved tail.
pub const ROLLUP_HEADER_LINES: usize = 9;

/// Counts taken from a log before it is rolled up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSummary {
    /// Lines starting with `## `, one per dated entry block.
    pub days_logged: usize,
    /// Lines whose trimmed form starts with `- `.
    pub bullet_items: usize,
}

impl LogSummary {
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            days_logged: lines.iter().filter(|l| l.starts_with("## ")).count(),
            bullet_items: lines
                .iter()
                .filter(|l| l.trim().starts_with("- "))
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollupOutcome {
    /// The log is within its limit and was not modified.
    NotNeeded {
        file_name: String,
        lines: usize,
        limit: usize,
    },
    /// The log was rewritten.
    RolledUp {
        file_name: String,
        before: usize,
        after: usize,
    },
}

/// Build the rolled-up content of `month`'s log from its original lines.
pub fn rolled_up_content(month: MonthKey, lines: &[&str], keep_tail_lines: usize) -> String {
    let summary = LogSummary::from_lines(lines);

    let mut output = vec![
        format!("{} (ROLLED UP)", monthly_log_title(month)),
        String::new(),
        "## Summary".to_string(),
        format!("- Days logged: {}", summary.days_logged),
        format!("- Bullet items: {}", summary.bullet_items),
        "- Notes: Monthly log exceeded size limit and was rolled up.".to_string(),
        String::new(),
        "## Recent Tail (last entries preserved)".to_string(),
        String::new(),
    ];

    let tail_start = lines.len().saturating_sub(keep_tail_lines);
    output.extend(lines[tail_start..].iter().map(|l| l.to_string()));

    let mut content = output.join("\n");
    content.push('\n');
    content
}

/// Roll up a monthly log if it exceeds the configured line limit.
///
/// The files for `today` are ensured first. `month` selects a log other
/// than the current one; that log must already exist.
pub fn rollup_month(
    config: &MemoryConfig,
    today: NaiveDate,
    month: Option<MonthKey>,
) -> Result<RollupOutcome> {
    let current_log = ensure_files(config, today)?;
    let target = month.unwrap_or_else(|| MonthKey::from_date(today));
    let log_path = config.layout.monthly_log_path(target);

    if log_path != current_log && !log_path.exists() {
        bail!(
            "No monthly log for {target}: {}",
            config.layout.display_path(&log_path)
        );
    }

    let file_name = log_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| target.log_file_name());
    let limit = config.limits.max_monthly_log_lines;
    let keep_tail = config.limits.keep_tail_lines;

    let mut outcome = None;
    locked_update(&log_path, |current| {
        let lines: Vec<&str> = current.lines().collect();
        if lines.len() <= limit {
            outcome = Some(RollupOutcome::NotNeeded {
                file_name: file_name.clone(),
                lines: lines.len(),
                limit,
            });
            return None;
        }

        let content = rolled_up_content(target, &lines, keep_tail);
        outcome = Some(RollupOutcome::RolledUp {
            file_name: file_name.clone(),
            before: lines.len(),
            after: content.lines().count(),
        });
        Some(content)
    })?;

    let Some(outcome) = outcome else {
        bail!("Rollup of {file_name} produced no result");
    };

    match &outcome {
        RollupOutcome::NotNeeded { lines, .. } => {
            tracing::debug!(file = %file_name, lines, limit, "rollup not needed")
        }
        RollupOutcome::RolledUp { before, after, .. } => {
            tracing::info!(file = %file_name, before, after, "monthly log rolled up")
        }
    }

    Ok(outcome)
}
