//! Error types for the hygiene checks.

use std::io;
use std::path::PathBuf;

use seniorhub_rules::{CommitType, EXPECTED_HEADER_FORMAT, HeaderError};
use serde::Serialize;
use thiserror::Error;

/// Why a file could not be turned into text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("file exceeds maximum size of {max} bytes")]
    TooLarge { max: u64 },

    #[error("file is not valid UTF-8")]
    InvalidEncoding,
}

/// The first rule a commit message broke.
///
/// `Display` renders the headline diagnostic; [`CommitError::diagnostic_lines`]
/// adds the follow-up hints printed for some failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommitError {
    #[error("Commit message file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read commit message file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("Empty commit message.")]
    Empty,

    #[error("Invalid commit header format.")]
    InvalidHeader {
        /// The trimmed header line that was rejected.
        header: String,
        #[source]
        cause: HeaderError,
    },

    #[error("Second line must be empty.")]
    SecondLineNotBlank,

    #[error("Commit description is required after blank line.")]
    MissingBody,
}

impl CommitError {
    /// All lines to print for this failure, headline first.
    #[must_use]
    pub fn diagnostic_lines(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        match self {
            Self::InvalidHeader { .. } => {
                lines.push(format!("Expected: {EXPECTED_HEADER_FORMAT}"));
                lines.push(format!("Allowed types: {}", CommitType::allowed_list()));
            }
            Self::SecondLineNotBlank => {
                lines.push("Expected format: header, blank line, description".to_owned());
            }
            _ => {}
        }
        lines
    }
}

/// A single problem found by the documentation guard.
///
/// Violations are collected, never propagated: the guard keeps going after
/// each one so the report lists everything that is wrong.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DocsViolation {
    /// The required file does not exist under the repository root.
    MissingFile { file: String },
    /// The file exists but does not contain a required token.
    MissingToken { file: String, token: String },
    /// The file exists but could not be read as text; its tokens were not checked.
    Unreadable { file: String, message: String },
}

impl DocsViolation {
    /// The documentation file this violation is about.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::MissingFile { file }
            | Self::MissingToken { file, .. }
            | Self::Unreadable { file, .. } => file,
        }
    }

    /// Format the violation for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match self {
            Self::MissingFile { file } => {
                format!("Missing required documentation file: {file}")
            }
            Self::MissingToken { file, token } => {
                format!("{file}: missing required section/token: {token}")
            }
            Self::Unreadable { file, message } => {
                format!("{file}: could not be read: {message}")
            }
        }
    }
}
