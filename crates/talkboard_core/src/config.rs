//! Runtime configuration for core callers.
//!
//! # Responsibility
//! - Collect tunables for logging and talk editing in plain structs.
//! - Provide build-mode aware defaults.

use crate::model::talk::TalkField;
use std::path::PathBuf;

const DEFAULT_MAX_LOG_FILE_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_LOG_FILES: usize = 5;

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// File logging settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Rotation threshold per file.
    pub max_file_bytes: u64,
    /// Number of rotated files kept on disk.
    pub max_files: usize,
}

impl LoggingConfig {
    /// Default rotation settings for `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: log_dir.into(),
            max_file_bytes: DEFAULT_MAX_LOG_FILE_BYTES,
            max_files: DEFAULT_MAX_LOG_FILES,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

/// Which talk fields must be non-blank for an edit to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPolicy {
    pub required: Vec<TalkField>,
}

impl EditorPolicy {
    /// Older edit form variant: image is mandatory as well.
    pub fn strict() -> Self {
        Self {
            required: vec![TalkField::Text, TalkField::Speaker, TalkField::Image],
        }
    }

    pub fn requires(&self, field: TalkField) -> bool {
        self.required.contains(&field)
    }
}

impl Default for EditorPolicy {
    fn default() -> Self {
        Self {
            required: vec![TalkField::Text, TalkField::Speaker],
        }
    }
}
