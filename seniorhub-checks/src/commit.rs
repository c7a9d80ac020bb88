//! Commit message validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! file exists, message not empty, header grammar, blank second line, body.

use std::path::Path;

use seniorhub_rules::{ParsedHeader, parse_header};

use crate::config::CommitCheckConfig;
use crate::error::CommitError;
use crate::fs::{is_blank, read_file_bounded, split_lines, trim_space};

/// A commit message that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub header: ParsedHeader,
    /// Non-blank lines after the separator, in order.
    pub body: Vec<String>,
}

/// Validate a commit message file, as handed to a `commit-msg` hook.
///
/// # Errors
///
/// Returns [`CommitError::NotFound`] if `path` does not exist,
/// [`CommitError::Unreadable`] if it cannot be read as UTF-8 text within
/// `config.max_file_size`, or the first format violation found by
/// [`check_commit_message`].
pub fn check_commit_message_file(
    path: &Path,
    config: &CommitCheckConfig,
) -> Result<CommitMessage, CommitError> {
    if !path.exists() {
        return Err(CommitError::NotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), "reading commit message");
    let text =
        read_file_bounded(path, config.max_file_size).map_err(|source| CommitError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    check_commit_message(&text)
}

/// Validate commit message text.
///
/// # Errors
///
/// Returns the first violated rule: [`CommitError::Empty`],
/// [`CommitError::InvalidHeader`], [`CommitError::SecondLineNotBlank`] or
/// [`CommitError::MissingBody`].
pub fn check_commit_message(text: &str) -> Result<CommitMessage, CommitError> {
    let lines = split_lines(text);
    let Some(first) = lines.first() else {
        return Err(CommitError::Empty);
    };

    let header_line = trim_space(first);
    let header = parse_header(header_line).map_err(|cause| {
        tracing::debug!(header = header_line, %cause, "commit header rejected");
        CommitError::InvalidHeader {
            header: header_line.to_owned(),
            cause,
        }
    })?;

    if lines.get(1).is_some_and(|second| !is_blank(second)) {
        return Err(CommitError::SecondLineNotBlank);
    }

    if lines.get(2).is_none_or(|third| is_blank(third)) {
        return Err(CommitError::MissingBody);
    }

    let body = lines
        .iter()
        .skip(2)
        .filter(|body_line| !is_blank(body_line))
        .map(|body_line| (*body_line).to_owned())
        .collect();

    tracing::debug!(
        commit_type = %header.commit_type,
        scope = %header.scope,
        "commit message accepted"
    );
    Ok(CommitMessage { header, body })
}
