//! Output formatting for check results.
//!
//! Diagnostics go to the writer the caller hands in (stdout for the
//! binaries). Logging never goes through here.

use std::io::Write;

use crate::error::CommitError;
use crate::report::DocsReport;

/// Write the diagnostic lines for a rejected commit message.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_commit_failure(err: &CommitError, writer: &mut dyn Write) -> anyhow::Result<()> {
    for line in err.diagnostic_lines() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Format a `DocsReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &DocsReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `DocsReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &DocsReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(writer, "Documentation guard passed.")?;
        return Ok(());
    }

    writeln!(writer, "Documentation guard failed:")?;
    for violation in &report.violations {
        writeln!(writer, "- {}", violation.format_human_readable())?;
    }
    Ok(())
}
