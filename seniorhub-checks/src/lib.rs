//! # seniorhub-checks
//!
//! Repository hygiene checks run as git hooks and CI gates:
//!
//! - **Commit message validator**: header `type(scope): summary`, a blank
//!   second line, and a body on the third line. Reports the first failure.
//! - **Docs guard**: every required documentation file exists and contains
//!   its section markers. Reports every failure.
//!
//! Both are exposed as library functions and as the `check-commit-message`
//! and `docs-guard` binaries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seniorhub_checks::{DocsGuardConfig, check_commit_message, guard_docs};
//!
//! let message = check_commit_message("feat(core): add x\n\nBody text").unwrap();
//! println!("type: {}", message.header.commit_type);
//!
//! let report = guard_docs(&DocsGuardConfig::for_root("."));
//! println!("Files checked: {}", report.checked_files);
//! println!("Violations: {}", report.violations_count());
//! println!("OK: {}", report.ok);
//! ```

pub mod cli;
mod commit;
mod config;
mod docs;
mod error;
pub mod fs;
pub mod logging;
pub mod output;
mod report;

pub use commit::{CommitMessage, check_commit_message, check_commit_message_file};
pub use config::{CommitCheckConfig, DEFAULT_MAX_FILE_SIZE, DocsGuardConfig};
pub use docs::guard_docs;
pub use error::{CommitError, DocsViolation, ReadError};
pub use report::DocsReport;
