//! Input validation for memroll.
//!
//! Settings paths are joined onto the project root, so they are checked
//! before use to keep every file the tool writes inside that root. Entry
//! text and reference dates supplied on the command line are checked here
//! as well.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::path::{Component, Path};

/// Date format accepted for the reference date override.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a configured path stays inside the project root.
///
/// A path is valid if:
/// - It is not empty
/// - It is relative (no root, no drive prefix)
/// - It contains no `..` components
///
/// # Examples
///
/// ```
/// use memroll::validation::validate_relative_path;
/// use std::path::Path;
///
/// assert!(validate_relative_path(Path::new("memory/archive")).is_ok());
/// assert!(validate_relative_path(Path::new("../elsewhere")).is_err());
/// assert!(validate_relative_path(Path::new("/etc/passwd")).is_err());
/// ```
pub fn validate_relative_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("Path cannot be empty");
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                bail!("Path '{}' must not contain '..'", path.display())
            }
            Component::RootDir | Component::Prefix(_) => {
                bail!("Path '{}' must be relative to the project root", path.display())
            }
        }
    }

    Ok(())
}

/// Validates log entry text. Any text with at least one non-whitespace
/// character is accepted; its structure is not inspected.
pub fn validate_entry_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Entry text cannot be empty");
    }

    Ok(())
}

/// Clap value parser for the `--today` override.
pub fn clap_date_validator(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}
