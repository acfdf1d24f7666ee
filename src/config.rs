//! Settings for a memory root.
//!
//! Defaults cover the usual layout; a `memroll.toml` at the project root
//! (or a file passed with `--config`) can override any of them:
//!
//! ```toml
//! [paths]
//! index = "memory.md"
//! archive_dir = "memory/archive"
//!
//! [limits]
//! max_monthly_log_lines = 800
//! keep_tail_lines = 200
//! ```

use crate::fs::memory::{MemoryLayout, ROLLUP_HEADER_LINES};
use crate::validation::validate_relative_path;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the settings file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "memroll.toml";

/// Monthly logs longer than this are rolled up.
pub const DEFAULT_MAX_MONTHLY_LOG_LINES: usize = 800;

/// Lines of the old log kept after a rollup.
pub const DEFAULT_KEEP_TAIL_LINES: usize = 200;

/// The index file should remain an index + snapshot.
pub const DEFAULT_MAX_INDEX_LINES: usize = 120;

/// Section headings that do not belong in the index file.
pub const DEFAULT_FORBIDDEN_MARKERS: &[&str] = &[
    "## Changelog",
    "## Open Tasks",
    "## Known Issues",
    // decisions belong in decisions.md
    "## Decisions",
];

/// Invalid settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("paths.{field} is invalid: {reason}")]
    InvalidPath { field: &'static str, reason: String },
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
    #[error("limits.forbidden_index_markers must not contain empty markers")]
    EmptyMarker,
    #[error(
        "limits.keep_tail_lines ({keep_tail_lines}) plus the {header}-line rollup \
         summary must stay below limits.max_monthly_log_lines ({max_monthly_log_lines})",
        header = ROLLUP_HEADER_LINES
    )]
    TailExceedsLimit {
        keep_tail_lines: usize,
        max_monthly_log_lines: usize,
    },
}

/// `[paths]` table: locations relative to the project root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    pub index: PathBuf,
    pub tasks: PathBuf,
    pub decisions: PathBuf,
    pub archive_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            index: PathBuf::from("memory.md"),
            tasks: PathBuf::from("tasks.md"),
            decisions: PathBuf::from("decisions.md"),
            archive_dir: Path::new("memory").join("archive"),
        }
    }
}

/// `[limits]` table: rollup and index policy thresholds.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSettings {
    pub max_monthly_log_lines: usize,
    pub keep_tail_lines: usize,
    pub max_index_lines: usize,
    pub forbidden_index_markers: Vec<String>,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_monthly_log_lines: DEFAULT_MAX_MONTHLY_LOG_LINES,
            keep_tail_lines: DEFAULT_KEEP_TAIL_LINES,
            max_index_lines: DEFAULT_MAX_INDEX_LINES,
            forbidden_index_markers: DEFAULT_FORBIDDEN_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Shape of the settings file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub paths: PathSettings,
    pub limits: LimitSettings,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse memroll settings")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("index", &self.paths.index),
            ("tasks", &self.paths.tasks),
            ("decisions", &self.paths.decisions),
            ("archive_dir", &self.paths.archive_dir),
        ];
        for (field, path) in paths {
            validate_relative_path(path).map_err(|e| ConfigError::InvalidPath {
                field,
                reason: e.to_string(),
            })?;
        }

        if self.limits.max_monthly_log_lines == 0 {
            return Err(ConfigError::ZeroLimit("max_monthly_log_lines"));
        }
        if self.limits.max_index_lines == 0 {
            return Err(ConfigError::ZeroLimit("max_index_lines"));
        }
        // a rolled-up log must come out under the limit
        if self.limits.keep_tail_lines + ROLLUP_HEADER_LINES
            >= self.limits.max_monthly_log_lines
        {
            return Err(ConfigError::TailExceedsLimit {
                keep_tail_lines: self.limits.keep_tail_lines,
                max_monthly_log_lines: self.limits.max_monthly_log_lines,
            });
        }
        if self
            .limits
            .forbidden_index_markers
            .iter()
            .any(|m| m.is_empty())
        {
            return Err(ConfigError::EmptyMarker);
        }

        Ok(())
    }
}

/// Everything an operation needs: where the files live and which limits
/// apply to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    pub layout: MemoryLayout,
    pub limits: LimitSettings,
}

impl MemoryConfig {
    /// Default settings rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            layout: MemoryLayout::with_defaults(root),
            limits: LimitSettings::default(),
        }
    }

    /// Validated settings rooted at `root`.
    pub fn from_settings<P: AsRef<Path>>(root: P, settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let Settings { paths, limits } = settings;
        Ok(Self {
            layout: MemoryLayout::new(
                root,
                paths.index,
                paths.tasks,
                paths.decisions,
                paths.archive_dir,
            ),
            limits,
        })
    }

    /// Load settings for `root`.
    ///
    /// An explicit `config_path` must exist. Otherwise `<root>/memroll.toml`
    /// is used when present, and the defaults when it is not.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.exists().then_some(default_path)
            }
        };

        let settings = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings");
                let content = fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read settings file: {}", path.display())
                })?;
                Settings::from_toml(&content)
                    .with_context(|| format!("Invalid settings file: {}", path.display()))?
            }
            None => Settings::default(),
        };

        Ok(Self::from_settings(root, settings)?)
    }
}
