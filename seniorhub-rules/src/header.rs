//! Commit header grammar: `type(scope): summary`.
//!
//! Acceptance is decided by a single anchored pattern. When a header is
//! rejected, [`HeaderError`] names the first part that is wrong so callers
//! can log something more useful than "no match".

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Human-readable shape of a valid header, as printed in diagnostics.
pub const EXPECTED_HEADER_FORMAT: &str = "type(name): summary";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"^(feat|fix|refactor|test|docs|chore)", // commit type
        r"\(([a-z0-9-]+)\)",                    // scope, non-empty
        r": ",                                  // literal separator
        r"(.+)",                                // summary, non-empty
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid commit header regex: {err}"),
    }
});

/// The kind of change a commit declares in its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Test,
    Docs,
    Chore,
}

impl CommitType {
    /// All allowed types, in the order they are listed to users.
    pub const ALL: [Self; 6] = [
        Self::Feat,
        Self::Fix,
        Self::Refactor,
        Self::Test,
        Self::Docs,
        Self::Chore,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Docs => "docs",
            Self::Chore => "chore",
        }
    }

    /// Comma-separated list of allowed types, e.g. `feat, fix, ...`.
    #[must_use]
    pub fn allowed_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HeaderError::UnknownType {
                found: s.to_owned(),
            })
    }
}

/// Why a header was rejected. Only the first offending part is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// No `(` at all, so there is no `type(scope)` prefix.
    #[error("missing '(scope)' after the commit type")]
    MissingScope,

    #[error("unknown commit type '{found}'")]
    UnknownType { found: String },

    #[error("scope is not closed with ')'")]
    UnclosedScope,

    /// Scope is empty or has characters outside `[a-z0-9-]`.
    #[error("invalid scope '{scope}': must be one or more of [a-z0-9-]")]
    InvalidScope { scope: String },

    #[error("expected ': ' after the scope")]
    MissingSeparator,

    #[error("summary is empty")]
    EmptySummary,

    /// Fallback when no specific part can be blamed.
    #[error("header does not match '{}'", EXPECTED_HEADER_FORMAT)]
    Malformed,
}

/// A header that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub commit_type: CommitType,
    pub scope: String,
    /// Everything after `": "`, verbatim.
    pub summary: String,
}

/// Valid scope: one or more of `[a-z0-9-]`.
#[inline]
#[must_use]
pub fn is_valid_scope(scope: &str) -> bool {
    !scope.is_empty()
        && scope
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Parse a commit header line.
///
/// The input is matched as given; trimming surrounding whitespace is the
/// caller's job.
///
/// # Errors
/// Returns the first offending part of the header if it does not match
/// `type(scope): summary`.
pub fn parse_header(header: &str) -> Result<ParsedHeader, HeaderError> {
    let Some(caps) = HEADER_PATTERN.captures(header) else {
        return Err(diagnose(header));
    };

    let commit_type: CommitType = caps
        .get(1)
        .ok_or(HeaderError::Malformed)?
        .as_str()
        .parse()?;
    let scope = caps.get(2).ok_or(HeaderError::Malformed)?.as_str();
    let summary = caps.get(3).ok_or(HeaderError::Malformed)?.as_str();

    Ok(ParsedHeader {
        commit_type,
        scope: scope.to_owned(),
        summary: summary.to_owned(),
    })
}

/// Walk the header left to right and blame the first part that is wrong.
fn diagnose(header: &str) -> HeaderError {
    let Some((raw_type, rest)) = header.split_once('(') else {
        return HeaderError::MissingScope;
    };
    if let Err(err) = raw_type.parse::<CommitType>() {
        return err;
    }
    let Some((scope, rest)) = rest.split_once(')') else {
        return HeaderError::UnclosedScope;
    };
    if !is_valid_scope(scope) {
        return HeaderError::InvalidScope {
            scope: scope.to_owned(),
        };
    }
    match rest.strip_prefix(": ") {
        None => HeaderError::MissingSeparator,
        Some("") => HeaderError::EmptySummary,
        // Summary contains something the pattern rejects (a line break).
        Some(_) => HeaderError::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        let parsed = parse_header("feat(core): add x").unwrap();
        assert_eq!(parsed.commit_type, CommitType::Feat);
        assert_eq!(parsed.scope, "core");
        assert_eq!(parsed.summary, "add x");
    }

    #[test]
    fn test_every_allowed_type_is_accepted() {
        for commit_type in CommitType::ALL {
            let header = format!("{commit_type}(api): do something");
            let parsed = parse_header(&header).unwrap();
            assert_eq!(parsed.commit_type, commit_type);
        }
    }

    #[test]
    fn test_scope_with_digits_and_hyphens() {
        let parsed = parse_header("fix(api-v2): handle 404").unwrap();
        assert_eq!(parsed.scope, "api-v2");
    }

    #[test]
    fn test_summary_is_kept_verbatim() {
        let parsed = parse_header("docs(readme):  two  spaces: and colons ").unwrap();
        assert_eq!(parsed.summary, " two  spaces: and colons ");
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert_eq!(
            parse_header("feature(core): add x"),
            Err(HeaderError::UnknownType {
                found: "feature".to_owned()
            })
        );
        assert_eq!(
            parse_header("Feat(core): add x"),
            Err(HeaderError::UnknownType {
                found: "Feat".to_owned()
            })
        );
    }

    #[test]
    fn test_missing_scope_rejected() {
        assert_eq!(parse_header("feat: add x"), Err(HeaderError::MissingScope));
        assert_eq!(parse_header(""), Err(HeaderError::MissingScope));
    }

    #[test]
    fn test_empty_scope_rejected() {
        assert_eq!(
            parse_header("feat(): add x"),
            Err(HeaderError::InvalidScope {
                scope: String::new()
            })
        );
    }

    #[test]
    fn test_uppercase_scope_rejected() {
        assert_eq!(
            parse_header("feat(Core): add x"),
            Err(HeaderError::InvalidScope {
                scope: "Core".to_owned()
            })
        );
        assert!(parse_header("feat(my_scope): add x").is_err());
    }

    #[test]
    fn test_unclosed_scope_rejected() {
        assert_eq!(
            parse_header("feat(core: add x"),
            Err(HeaderError::UnclosedScope)
        );
    }

    #[test]
    fn test_missing_separator_rejected() {
        assert_eq!(
            parse_header("feat(core):add x"),
            Err(HeaderError::MissingSeparator)
        );
        assert_eq!(
            parse_header("feat(core) add x"),
            Err(HeaderError::MissingSeparator)
        );
    }

    #[test]
    fn test_empty_summary_rejected() {
        assert_eq!(parse_header("feat(core): "), Err(HeaderError::EmptySummary));
    }

    #[test]
    fn test_leading_whitespace_is_not_trimmed_here() {
        assert!(parse_header("  feat(core): add x").is_err());
    }

    #[test]
    fn test_allowed_list() {
        assert_eq!(
            CommitType::allowed_list(),
            "feat, fix, refactor, test, docs, chore"
        );
    }

    #[test]
    fn test_is_valid_scope() {
        assert!(is_valid_scope("core"));
        assert!(is_valid_scope("a-1"));
        assert!(is_valid_scope("-"));
        assert!(!is_valid_scope(""));
        assert!(!is_valid_scope("a b"));
        assert!(!is_valid_scope("a.b"));
    }
}
