//! Paths of the canonical memory files under a project root.

use super::month::MonthKey;
use super::templates::CanonicalFile;
use std::path::{Path, PathBuf};

/// Resolves every memory file path from the project root and the
/// configured relative locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLayout {
    root: PathBuf,
    index: PathBuf,
    tasks: PathBuf,
    decisions: PathBuf,
    archive_dir: PathBuf,
}

impl MemoryLayout {
    /// Build a layout from a root and paths relative to it.
    pub fn new<P: AsRef<Path>>(
        root: P,
        index: impl Into<PathBuf>,
        tasks: impl Into<PathBuf>,
        decisions: impl Into<PathBuf>,
        archive_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            index: index.into(),
            tasks: tasks.into(),
            decisions: decisions.into(),
            archive_dir: archive_dir.into(),
        }
    }

    /// Layout with the default file names under `root`.
    pub fn with_defaults<P: AsRef<Path>>(root: P) -> Self {
        Self::new(
            root,
            "memory.md",
            "tasks.md",
            "decisions.md",
            Path::new("memory").join("archive"),
        )
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.root.join(&self.archive_dir)
    }

    pub fn file_path(&self, file: CanonicalFile) -> PathBuf {
        let relative = match file {
            CanonicalFile::Index => &self.index,
            CanonicalFile::Tasks => &self.tasks,
            CanonicalFile::Decisions => &self.decisions,
        };
        self.root.join(relative)
    }

    pub fn index_path(&self) -> PathBuf {
        self.file_path(CanonicalFile::Index)
    }

    pub fn monthly_log_path(&self, month: MonthKey) -> PathBuf {
        self.archive_dir().join(month.log_file_name())
    }

    /// Display a path relative to the root, or just its file name if it
    /// lies outside the root.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| {
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string())
            })
    }
}
