//! Canonical memory files and the templates they are created from.

use super::layout::MemoryLayout;
use super::month::MonthKey;

/// The three long-lived files kept at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalFile {
    Index,
    Tasks,
    Decisions,
}

impl CanonicalFile {
    /// All canonical files, in creation order
    pub fn all() -> &'static [CanonicalFile] {
        &[
            CanonicalFile::Index,
            CanonicalFile::Tasks,
            CanonicalFile::Decisions,
        ]
    }

    /// Template written when the file is missing or blank. The index links
    /// to the other files where `layout` places them.
    pub fn template(&self, layout: &MemoryLayout) -> String {
        match self {
            CanonicalFile::Index => index_template(layout),
            CanonicalFile::Tasks => TASKS_TEMPLATE.to_string(),
            CanonicalFile::Decisions => DECISIONS_TEMPLATE.to_string(),
        }
    }
}

fn index_template(layout: &MemoryLayout) -> String {
    let tasks = layout.display_path(&layout.file_path(CanonicalFile::Tasks));
    let decisions = layout.display_path(&layout.file_path(CanonicalFile::Decisions));
    let archive = layout.display_path(&layout.archive_dir());

    format!(
        "\
# Project Memory (INDEX)

## Current Snapshot (keep <= 60 lines)
- Goal:
- Current milestone:
- Current focus:
- Repo invariants (do-not-break):
- Last known good commands:
- Environment notes:

## Canonical References
- Active tasks: ./{tasks}
- Durable decisions: ./{decisions}
- Append-only logs: ./{archive}/

## Repo Map (high-signal only)
- Entry point:
- Core logic:

## Rollup Policy
- Logs go to ./{archive}/memory-log-YYYY-MM.md
- Roll up large monthly logs with: memroll rollup
"
    )
}

const TASKS_TEMPLATE: &str = "\
# Active Tasks (CANONICAL)

This file contains ONLY current, actionable work.

## Now (top priority, max 7)
- [ ]

## Next (ready but not started)
- [ ]

## Parked / Blocked
- (none)

## Rules
- Keep this list short and current.
- No history, no design notes.
- When done, remove the task and record outcome in the monthly archive log.
";

const DECISIONS_TEMPLATE: &str = "\
# Durable Decisions (CANONICAL)

Append-only decisions that affect workflow, invariants, or structure.
Do NOT record transient implementation choices here.

## Decisions
- YYYY-MM-DD: Decision. Rationale: ... Implication: ...

## Rules
- Append only; never rewrite past decisions.
- If a decision changes, add a NEW decision that supersedes it.
";

/// Title line of a monthly log.
pub fn monthly_log_title(month: MonthKey) -> String {
    format!("# Memory Log — {month}")
}

/// Initial content of a monthly log: the title and a blank line.
pub fn monthly_log_template(month: MonthKey) -> String {
    format!("{}\n\n", monthly_log_title(month))
}
