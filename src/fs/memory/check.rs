//! Size and content policy for the index file.

use crate::config::{LimitSettings, MemoryConfig};
use crate::fs::locking::locked_read;
use anyhow::Result;

/// Result of checking the index file. Issues are kept in the order the
/// checks ran: missing file, then length, then forbidden markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub issues: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check the index file against the configured limits. Never writes.
pub fn check_index(config: &MemoryConfig) -> Result<CheckReport> {
    let path = config.layout.index_path();
    let name = config.layout.display_path(&path);

    if !path.exists() {
        return Ok(CheckReport {
            issues: vec![format!("{name} is missing (run: memroll ensure)")],
        });
    }

    let text = locked_read(&path)?;
    let issues = index_issues(&name, &text, &config.limits);
    tracing::debug!(file = %name, issues = issues.len(), "index checked");

    Ok(CheckReport { issues })
}

/// Policy issues found in the index text `text`, named `name` in messages.
pub fn index_issues(name: &str, text: &str, limits: &LimitSettings) -> Vec<String> {
    let mut issues = Vec::new();

    let line_count = text.lines().count();
    if line_count > limits.max_index_lines {
        issues.push(format!(
            "{name} is {line_count} lines (limit {}). It should be index + snapshot only.",
            limits.max_index_lines
        ));
    }

    for marker in &limits.forbidden_index_markers {
        if text.contains(marker.as_str()) {
            issues.push(format!("{name} contains forbidden section marker: {marker}"));
        }
    }

    issues
}
