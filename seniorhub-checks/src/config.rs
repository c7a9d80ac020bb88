//! Configuration types for the hygiene checks.
//!
//! There is no config file: the rules are fixed in `seniorhub-rules`. These
//! structs only carry what a caller (the CLI or a test) decides per run.

use std::path::PathBuf;

use seniorhub_rules::{DocRequirement, REQUIRED_DOCS};

/// Default per-file read limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Options for the commit message validator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CommitCheckConfig {
    /// Maximum commit message file size in bytes (default: 10 MiB).
    pub max_file_size: u64,
}

impl Default for CommitCheckConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Options for the documentation guard.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DocsGuardConfig {
    /// Repository root the required files are resolved against.
    pub root: PathBuf,
    /// Files and tokens to check, in report order (default: [`REQUIRED_DOCS`]).
    pub requirements: Vec<DocRequirement>,
    /// Maximum size of a single documentation file in bytes (default: 10 MiB).
    pub max_file_size: u64,
}

impl DocsGuardConfig {
    /// Default requirements and limits, checked against `root`.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for DocsGuardConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            requirements: REQUIRED_DOCS.to_vec(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
