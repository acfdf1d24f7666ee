//! Project memory files.
//!
//! A memory root holds three canonical files and a directory of monthly
//! logs:
//! - `memory.md`: index + current snapshot only, kept small
//! - `tasks.md`: active tasks only
//! - `decisions.md`: durable decisions only
//! - `memory/archive/memory-log-YYYY-MM.md`: append-only dated entries
//!
//! Every operation first ensures the files exist, creating missing or blank
//! ones from fixed templates. Oversized monthly logs are rolled up into a
//! summary plus the most recent lines.

mod append;
mod check;
mod ensure;
mod layout;
mod month;
mod rollup;
mod templates;

pub use append::{append_entry, format_entry};
pub use check::{check_index, index_issues, CheckReport};
pub use ensure::ensure_files;
pub use layout::MemoryLayout;
pub use month::{MonthKey, MonthKeyError};
pub use rollup::{
    rolled_up_content, rollup_month, LogSummary, RollupOutcome, ROLLUP_HEADER_LINES,
};
pub use templates::{monthly_log_template, monthly_log_title, CanonicalFile};
