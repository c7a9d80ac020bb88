//! Documentation requirement table.

/// A documentation file that must exist, with the section markers it must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRequirement {
    /// Path relative to the repository root.
    pub file: &'static str,
    /// Literal substrings that must appear somewhere in the file, checked in order.
    pub tokens: &'static [&'static str],
}

/// Required documentation files, in the order they are checked and reported.
pub const REQUIRED_DOCS: &[DocRequirement] = &[
    DocRequirement {
        file: "README.md",
        tokens: &["# seniorhub", "## Objective", "## Quality checks"],
    },
    DocRequirement {
        file: "CHANGELOG.md",
        tokens: &["# Changelog", "## [Unreleased]"],
    },
    DocRequirement {
        file: "AGENTS.md",
        tokens: &[
            "# AGENTS.md",
            "## Project objective",
            "## Contribution workflow",
        ],
    },
    DocRequirement {
        file: "ARCHITECTURE.md",
        tokens: &["# ARCHITECTURE.md", "## 1. Technical vision"],
    },
    DocRequirement {
        file: "TODO.md",
        tokens: &["# TODO.md"],
    },
    DocRequirement {
        file: "IDEAS.md",
        tokens: &["# IDEAS.md"],
    },
    DocRequirement {
        file: "CONTRIBUTING.md",
        tokens: &[
            "# CONTRIBUTING.md",
            "## Commit format",
            "## Mandatory checks before commit",
        ],
    },
];
