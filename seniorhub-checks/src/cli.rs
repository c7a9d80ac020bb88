//! Argument parsing shared by the check binaries.

use std::process::ExitCode;

use clap::Parser;

/// Parse process arguments, mapping clap's exit behaviour onto the checks' codes.
///
/// `--help` and `--version` print and yield exit code 0; every other parse
/// error prints clap's message to stderr and yields 1 (clap alone would use 2).
/// If the message itself cannot be written, the exit code is 1 even for
/// `--help` and `--version`.
///
/// # Errors
///
/// Returns the exit code the process should terminate with when parsing
/// does not produce arguments to run with.
pub fn parse_args<C: Parser>() -> Result<C, ExitCode> {
    C::try_parse().map_err(|err| {
        // Nowhere left to report a failed write; the exit code carries it.
        if err.print().is_err() {
            return ExitCode::FAILURE;
        }
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}
