//! Creation of the memory files from their templates.

use super::month::MonthKey;
use super::templates::{monthly_log_template, CanonicalFile};
use crate::config::MemoryConfig;
use crate::fs::locking::write_if_blank;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure the archive directory, this month's log and the canonical
/// files all exist.
///
/// A file is written from its template only when it is missing or blank;
/// anything with content is left exactly as it is. Returns the path of the
/// monthly log for `today`.
pub fn ensure_files(config: &MemoryConfig, today: NaiveDate) -> Result<PathBuf> {
    let layout = &config.layout;
    let archive_dir = layout.archive_dir();
    fs::create_dir_all(&archive_dir).with_context(|| {
        format!(
            "Failed to create archive directory: {}",
            archive_dir.display()
        )
    })?;

    let month = MonthKey::from_date(today);
    let log_path = layout.monthly_log_path(month);
    ensure_file(&log_path, &monthly_log_template(month), layout.display_path(&log_path))?;

    for file in CanonicalFile::all() {
        let path = layout.file_path(*file);
        ensure_file(&path, &file.template(layout), layout.display_path(&path))?;
    }

    Ok(log_path)
}

fn ensure_file(path: &Path, template: &str, shown: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    if write_if_blank(path, template)? {
        tracing::info!(file = %shown, "created from template");
    } else {
        tracing::debug!(file = %shown, "already present");
    }

    Ok(())
}
