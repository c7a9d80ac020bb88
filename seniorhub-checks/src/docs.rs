//! Documentation guard: required files must exist and contain their section markers.

use crate::config::DocsGuardConfig;
use crate::error::DocsViolation;
use crate::fs::read_file_bounded;
use crate::report::DocsReport;

/// Check every required documentation file under `config.root`.
///
/// Never stops early: a missing file skips only that file's tokens, and every
/// missing token is reported, so one run lists everything that needs fixing.
#[must_use]
pub fn guard_docs(config: &DocsGuardConfig) -> DocsReport {
    let mut violations = Vec::new();
    let mut checked_files: usize = 0;

    for req in &config.requirements {
        let path = config.root.join(req.file);
        if !path.exists() {
            tracing::debug!(file = req.file, "required documentation file missing");
            violations.push(DocsViolation::MissingFile {
                file: req.file.to_owned(),
            });
            continue;
        }

        let content = match read_file_bounded(&path, config.max_file_size) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(file = req.file, %err, "documentation file unreadable");
                violations.push(DocsViolation::Unreadable {
                    file: req.file.to_owned(),
                    message: err.to_string(),
                });
                continue;
            }
        };
        checked_files += 1;

        for token in req.tokens {
            if !content.contains(token) {
                tracing::debug!(file = req.file, token, "required token missing");
                violations.push(DocsViolation::MissingToken {
                    file: req.file.to_owned(),
                    token: (*token).to_owned(),
                });
            }
        }
    }

    tracing::info!(
        root = %config.root.display(),
        checked_files,
        violations = violations.len(),
        "documentation guard finished"
    );
    DocsReport::new(checked_files, violations)
}
