//! File locking utilities for memory files
//!
//! Every write the tool performs goes through these helpers, which hold an
//! `fs2` advisory lock for the duration of the operation. Two invocations
//! racing on the same log (an append and a rollup, say) are serialized
//! instead of losing each other's writes.
//!
//! Advisory locks are cooperative - they only protect against other
//! processes that also use these functions.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Read file contents with a shared (read) lock.
pub fn locked_read(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;
    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content)
}

/// Append to a file (creating it if needed) under an exclusive lock.
pub fn locked_append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file for appending: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to append to file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;
    Ok(())
}

/// Read, transform and rewrite a file while holding one exclusive lock.
///
/// `update` receives the current content. Returning `Some(new)` replaces the
/// whole file; returning `None` leaves it byte-for-byte untouched. The
/// return value reports whether the file was rewritten.
///
/// The sequence is: open → lock → read → truncate → write → flush, so no
/// other locked writer can slip in between the read and the rewrite.
pub fn locked_update<F>(path: &Path, update: F) -> Result<bool>
where
    F: FnOnce(&str) -> Option<String>,
{
    // Open without truncation; truncation happens via set_len(0) only once
    // the lock is held and the new content is known.
    #[allow(clippy::suspicious_open_options)]
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file for update: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;

    let mut current = String::new();
    file.read_to_string(&mut current)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let Some(replacement) = update(&current) else {
        return Ok(false);
    };

    file.set_len(0)
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;
    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("Failed to rewind file: {}", path.display()))?;
    file.write_all(replacement.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;
    Ok(true)
}

/// Write `content` only if the file is missing or holds nothing but
/// whitespace. Returns whether the file was written.
///
/// A file with content is only opened for reading, so read-only files are
/// fine as long as they are not blank.
pub fn write_if_blank(path: &Path, content: &str) -> Result<bool> {
    if path.exists() && !locked_read(path)?.trim().is_empty() {
        return Ok(false);
    }

    // Blank or missing: re-check under the exclusive lock.
    locked_update(path, |current| {
        current.trim().is_empty().then(|| content.to_string())
    })
}
