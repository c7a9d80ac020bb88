//! Documentation guard report.

use serde::Serialize;

use crate::error::DocsViolation;

/// Result of a documentation guard run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct DocsReport {
    /// Number of required files that existed and were read.
    pub checked_files: usize,
    /// Whether every required file exists and contains every required token.
    pub ok: bool,
    /// Every violation found, in table order (file order, then token order).
    pub violations: Vec<DocsViolation>,
}

impl DocsReport {
    /// Build a report; `ok` follows from `violations` being empty.
    #[must_use]
    pub fn new(checked_files: usize, violations: Vec<DocsViolation>) -> Self {
        Self {
            checked_files,
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Number of violations found.
    #[must_use]
    pub fn violations_count(&self) -> usize {
        self.violations.len()
    }
}
