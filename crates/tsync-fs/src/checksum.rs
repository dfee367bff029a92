//! Normalized SHA-256 fingerprints
//!
//! A fingerprint identifies file content independently of the platform or
//! editor that last saved it. Before hashing, content is normalized:
//!
//! - a leading UTF-8 byte-order mark is removed
//! - `\r\n` line endings become `\n`
//! - trailing whitespace, including Unicode spaces such as NBSP, is trimmed
//!   from every line
//!
//! The result uses the canonical format `sha256:<hex>`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::{Error, Result};

/// Prefix for all fingerprints produced by this module
const PREFIX: &str = "sha256:";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A normalized content fingerprint in the form `sha256:<hex>`.
///
/// Values loaded from a manifest are accepted as-is, so a fingerprint may be
/// empty when the manifest recorded no usable baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Produce the normalized byte stream that [`fingerprint`] hashes.
pub fn normalize(content: &[u8]) -> Vec<u8> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let mut out = Vec::with_capacity(content.len());

    for (i, line) in content.split(|b| *b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(trim_trailing_whitespace(line));
    }

    out
}

/// Trailing `\r` is whitespace here, which also folds CRLF into LF.
///
/// Lines that decode as UTF-8 lose all trailing Unicode whitespace (for
/// example NBSP or the ideographic space). Other lines lose only ASCII
/// whitespace.
fn trim_trailing_whitespace(line: &[u8]) -> &[u8] {
    if let Ok(text) = std::str::from_utf8(line) {
        return text.trim_end().as_bytes();
    }
    let end = line
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t' | b'\r' | 0x0B | 0x0C))
        .map_or(0, |idx| idx + 1);
    &line[..end]
}

/// Compute the normalized fingerprint of raw content.
pub fn fingerprint(content: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(normalize(content));
    Fingerprint(format!("{}{:x}", PREFIX, hasher.finalize()))
}

/// Compute the normalized fingerprint of string content.
pub fn fingerprint_str(content: &str) -> Fingerprint {
    fingerprint(content.as_bytes())
}

/// Compute the normalized fingerprint of a file's contents.
///
/// # Errors
///
/// Returns [`Error::Hashing`] if the file cannot be read.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint> {
    let content = std::fs::read(path).map_err(|e| Error::hashing(path, e))?;
    Ok(fingerprint(&content))
}

/// Fingerprint a file, treating a missing file as absent.
///
/// # Errors
///
/// Returns [`Error::Hashing`] for any read failure other than the file not
/// existing.
pub fn fingerprint_file_if_exists(path: &Path) -> Result<Option<Fingerprint>> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(fingerprint(&content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::hashing(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_has_prefix() {
        let fp = fingerprint_str("hello world");
        assert!(fp.as_str().starts_with("sha256:"));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint_str("test"), fingerprint_str("test"));
    }

    #[test]
    fn different_content_different_fingerprint() {
        assert_ne!(fingerprint_str("aaa"), fingerprint_str("bbb"));
    }

    #[test]
    fn fingerprint_known_value() {
        // Clean content normalizes to itself
        assert_eq!(
            fingerprint_str("hello world").as_str(),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn crlf_and_lf_hash_identically() {
        assert_eq!(fingerprint_str("a\r\nb\r\nc"), fingerprint_str("a\nb\nc"));
    }

    #[test]
    fn bom_is_ignored() {
        let mut with_bom = UTF8_BOM.to_vec();
        with_bom.extend_from_slice(b"# Title\n");
        assert_eq!(fingerprint(&with_bom), fingerprint_str("# Title\n"));
    }

    #[test]
    fn bom_is_only_stripped_at_start() {
        let mut inner = b"a\n".to_vec();
        inner.extend_from_slice(UTF8_BOM);
        assert_ne!(fingerprint(&inner), fingerprint_str("a\n"));
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert_eq!(fingerprint_str("a  \nb\t\n"), fingerprint_str("a\nb\n"));
    }

    #[test]
    fn trailing_unicode_whitespace_is_ignored() {
        assert_eq!(fingerprint_str("a\u{00A0}\nb"), fingerprint_str("a\nb"));
        assert_eq!(fingerprint_str("a\u{3000}\r\nb"), fingerprint_str("a\nb"));
        assert_ne!(fingerprint_str("a\u{00A0}b"), fingerprint_str("ab"));
    }

    #[test]
    fn non_utf8_lines_trim_ascii_whitespace() {
        assert_eq!(fingerprint(b"\xFFa \t\r\nb"), fingerprint(b"\xFFa\nb"));
        assert_ne!(fingerprint(b"\xFFa"), fingerprint(b"a"));
    }

    #[test]
    fn leading_whitespace_is_significant() {
        assert_ne!(fingerprint_str("  a"), fingerprint_str("a"));
    }

    #[test]
    fn real_edits_are_not_masked() {
        assert_ne!(fingerprint_str("A\nB\nC"), fingerprint_str("A\nB\nZ"));
        assert_ne!(fingerprint_str("A\nB"), fingerprint_str("A\nB\nC"));
    }

    #[test]
    fn trailing_newline_is_significant() {
        assert_ne!(fingerprint_str("A\n"), fingerprint_str("A"));
    }

    #[test]
    fn normalize_handles_empty_input() {
        assert!(normalize(b"").is_empty());
        assert!(normalize(UTF8_BOM).is_empty());
    }

    #[test]
    fn file_fingerprint_matches_content_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.md");
        std::fs::write(&path, "hello\r\nworld  \r\n").unwrap();

        let file_fp = fingerprint_file(&path).unwrap();
        assert_eq!(file_fp, fingerprint_str("hello\nworld\n"));
    }

    #[test]
    fn missing_file_is_a_hashing_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = fingerprint_file(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(Error::Hashing { .. })));
    }

    #[test]
    fn missing_file_is_absent_when_optional() {
        let dir = tempfile::tempdir().unwrap();
        let result = fingerprint_file_if_exists(&dir.path().join("missing.md")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn directory_is_a_hashing_error_when_optional() {
        let dir = tempfile::tempdir().unwrap();
        let result = fingerprint_file_if_exists(dir.path());
        assert!(matches!(result, Err(Error::Hashing { .. })));
    }
}
