// print_stdout/print_stderr: this is a CLI binary; diagnostics on stdout are its contract.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use seniorhub_checks::{CommitCheckConfig, check_commit_message_file, cli, logging, output};

#[derive(Parser, Debug)]
#[command(
    name = "check-commit-message",
    version,
    about = "Validate a commit message file: 'type(scope): summary', a blank line, then a description",
    after_help = "Allowed types: feat, fix, refactor, test, docs, chore\n\nTypical commit-msg hook:\n  check-commit-message \"$1\"\n"
)]
struct Cli {
    /// Path to the commit message file (the hook's first argument)
    path: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();

    let Some(path) = cli.path else {
        writeln!(stdout, "Missing commit message file path.")?;
        return Ok(ExitCode::FAILURE);
    };

    match check_commit_message_file(&path, &CommitCheckConfig::default()) {
        Ok(message) => {
            tracing::info!(
                path = %path.display(),
                commit_type = %message.header.commit_type,
                scope = %message.header.scope,
                "commit message is valid"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            output::write_commit_failure(&err, &mut stdout)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let cli = match cli::parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    logging::init(cli.verbose);

    run(cli).unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    })
}
