//! Filesystem and line helpers shared by both checks.
//!
//! Reads are bounded: a file is streamed through `Read::take` so an
//! oversized input is reported instead of loaded, and the size check and the
//! read are the same operation.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::ReadError;

/// Read a UTF-8 text file, refusing anything larger than `max_file_size` bytes.
///
/// # Errors
///
/// Returns [`ReadError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ReadError> {
    let file = std::fs::File::open(path)?;

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() as u64 > max_file_size {
        return Err(ReadError::TooLarge { max: max_file_size });
    }

    String::from_utf8(buffer).map_err(|_| ReadError::InvalidEncoding)
}

/// Characters that end a line. `\r\n` is a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on any of [`LINE_BREAKS`].
///
/// A trailing terminator does not start an extra line, so `"a\n"` is one
/// line, `"\n"` is one empty line and `""` is no lines at all.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some((idx, brk)) = rest
            .char_indices()
            .find(|(_, c)| LINE_BREAKS.contains(c))
        else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..idx]);
        let width = if rest[idx..].starts_with("\r\n") {
            2
        } else {
            brk.len_utf8()
        };
        rest = &rest[idx + width..];
    }
    lines
}

/// Unicode whitespace plus the ASCII separators `\x1c` to `\x1f`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strip leading and trailing whitespace, separators `\x1c` to `\x1f` included.
#[must_use]
pub fn trim_space(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Whether a line holds nothing but whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Nearest ancestor of `start` (inclusive) that contains a `.git` entry.
///
/// `.git` may be a directory or, for worktrees and submodules, a file.
/// Falls back to `start` when no ancestor qualifies.
#[must_use]
pub fn find_repo_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .unwrap_or(start)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_terminators() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\n\r\nb\r\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_lines_control_and_unicode_breaks() {
        assert_eq!(split_lines("a\x0bb\x0cc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\x1cb\x1dc\x1ed"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\u{85}b"), vec!["a", "b"]);
        assert_eq!(split_lines("a\u{2028}b\u{2029}"), vec!["a", "b"]);
        // Only \r\n pairs up; \x0c followed by \n is two breaks.
        assert_eq!(split_lines("a\x0c\nb"), vec!["a", "", "b"]);
        // \x1f is whitespace but not a line break.
        assert_eq!(split_lines("a\x1fb"), vec!["a\x1fb"]);
    }

    #[test]
    fn test_trim_space_and_is_blank() {
        assert_eq!(trim_space(" \x1f\tfeat(x): y\x1c "), "feat(x): y");
        assert_eq!(trim_space("\u{a0}a b\u{3000}"), "a b");
        assert!(is_blank(""));
        assert!(is_blank(" \t\x0b\x1f"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_read_file_bounded_ok() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("msg.txt");
        std::fs::write(&path, "hello").unwrap();
        assert_eq!(read_file_bounded(&path, 5).unwrap(), "hello");
    }

    #[test]
    fn test_read_file_bounded_too_large() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("msg.txt");
        std::fs::write(&path, "hello!").unwrap();
        assert!(matches!(
            read_file_bounded(&path, 5),
            Err(ReadError::TooLarge { max: 5 })
        ));
    }

    #[test]
    fn test_read_file_bounded_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("msg.txt");
        std::fs::write(&path, [0x66, 0xff, 0xfe]).unwrap();
        assert!(matches!(
            read_file_bounded(&path, 1024),
            Err(ReadError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_read_file_bounded_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            read_file_bounded(tmp.path(), 1024),
            Err(ReadError::Io(_))
        ));
    }

    #[test]
    fn test_find_repo_root() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("docs/deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_repo_root(&nested), tmp.path());
        assert_eq!(find_repo_root(tmp.path()), tmp.path());
    }

    #[test]
    fn test_find_repo_root_falls_back_to_start() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("plain");
        std::fs::create_dir(&nested).unwrap();
        // Only meaningful when no ancestor of the temp dir is a repository.
        if tmp.path().ancestors().all(|d| !d.join(".git").exists()) {
            assert_eq!(find_repo_root(&nested), nested);
        }
    }
}
