//! Dated entries appended to the monthly log.

use super::ensure::ensure_files;
use crate::config::MemoryConfig;
use crate::fs::locking::locked_append;
use crate::validation::{validate_entry_text, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Format one entry block: a date heading, a single bullet and a blank line.
pub fn format_entry(today: NaiveDate, text: &str) -> String {
    format!("## {}\n- {}\n\n", today.format(DATE_FORMAT), text.trim())
}

/// Append `text` as a dated entry to this month's log.
///
/// Existing content is never rewritten and entries are not deduplicated:
/// two calls on the same day produce two headings with the same date.
/// Returns the path of the log written to.
pub fn append_entry(config: &MemoryConfig, today: NaiveDate, text: &str) -> Result<PathBuf> {
    validate_entry_text(text)?;

    let log_path = ensure_files(config, today)?;
    locked_append(&log_path, &format_entry(today, text))?;
    tracing::info!(
        file = %config.layout.display_path(&log_path),
        "entry appended"
    );

    Ok(log_path)
}
