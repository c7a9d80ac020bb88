//! Fixed rule tables for the seniorhub repository hygiene checks.
//!
//! This crate is the single source of truth for what the checks enforce:
//! - the commit header grammar `type(scope): summary` ([`parse_header`])
//! - the documentation requirement table ([`REQUIRED_DOCS`])
//!
//! Nothing here touches the filesystem; reading files and reporting
//! belong to `seniorhub-checks`.

mod docs;
mod header;

pub use docs::{DocRequirement, REQUIRED_DOCS};
pub use header::{
    CommitType, EXPECTED_HEADER_FORMAT, HeaderError, ParsedHeader, is_valid_scope, parse_header,
};
