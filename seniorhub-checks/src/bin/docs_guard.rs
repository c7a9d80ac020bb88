// print_stdout/print_stderr: this is a CLI binary; diagnostics on stdout are its contract.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use seniorhub_checks::fs::find_repo_root;
use seniorhub_checks::{DocsGuardConfig, cli, guard_docs, logging, output};

#[derive(Parser, Debug)]
#[command(
    name = "docs-guard",
    version,
    about = "Check that the required documentation files exist and contain their required sections",
    after_help = "Examples:\n  docs-guard\n  docs-guard --root path/to/repo\n  docs-guard --format json\n"
)]
struct Cli {
    /// Repository root to check [default: enclosing git repository, else the current directory]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let root = match cli.root {
        Some(root) => root,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            find_repo_root(&cwd)
        }
    };
    tracing::debug!(root = %root.display(), "checking documentation");

    let report = guard_docs(&DocsGuardConfig::for_root(root));

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }

    Ok(if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
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
