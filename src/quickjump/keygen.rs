//! # Bookmark Keys
//!
//! Keys are derived from the bookmarked path, so the same directory always
//! gets the same key on every machine that shares the database.
//!
//! The path is hashed with SHA-256 and the first 128 bits of the digest are
//! written out as base36 digits (`0-9a-z`). A key of length `n` is the first
//! `n` digits of that stream. When the shortest candidate is already taken by
//! a different directory, the store asks for one more digit, up to the
//! policy's maximum length:
//!
//! ```text
//! /home/alice/project  ->  k3x  (taken)  ->  k3x9  (free)
//! ```

use crate::error::{QuickJumpError, Result};
use sha2::{Digest, Sha256};
use std::ops::RangeInclusive;
use std::path::{Component, Path, PathBuf};

pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest key the digest can produce: 36^24 still fits in 128 bits.
pub const MAX_KEY_CAPACITY: usize = 24;

pub const DEFAULT_KEY_LENGTH: usize = 3;
pub const DEFAULT_MAX_KEY_LENGTH: usize = 8;

/// The range of key lengths tried when bookmarking a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPolicy {
    length: usize,
    max_length: usize,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
            max_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

impl KeyPolicy {
    pub fn new(length: usize, max_length: usize) -> Result<Self> {
        if length == 0 {
            return Err(QuickJumpError::Config(
                "key_length must be at least 1".to_string(),
            ));
        }
        if max_length < length {
            return Err(QuickJumpError::Config(format!(
                "max_key_length ({}) is shorter than key_length ({})",
                max_length, length
            )));
        }
        if max_length > MAX_KEY_CAPACITY {
            return Err(QuickJumpError::Config(format!(
                "max_key_length cannot exceed {}",
                MAX_KEY_CAPACITY
            )));
        }
        Ok(Self { length, max_length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.length..=self.max_length
    }

    pub fn attempts(&self) -> usize {
        self.max_length - self.length + 1
    }
}

/// Deterministic candidate key for `path` with `length` characters.
///
/// `length` is clamped to [`MAX_KEY_CAPACITY`].
pub fn candidate_key(path: &str, length: usize) -> String {
    let digest = Sha256::digest(path.as_bytes());
    let mut head = [0u8; 16];
    head.copy_from_slice(&digest[..16]);
    let mut value = u128::from_be_bytes(head);

    let mut key = String::with_capacity(length);
    for _ in 0..length.min(MAX_KEY_CAPACITY) {
        key.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    key
}

/// Canonical string form used both for hashing and for storage.
///
/// `.` and `..` are resolved lexically and repeated or trailing separators
/// collapse, so every spelling of a directory maps to one key. Symlinks are
/// left alone.
pub fn normalize_path(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(QuickJumpError::InvalidPath("empty path".to_string()));
    }
    let raw = Path::new(path);
    if !raw.is_absolute() {
        return Err(QuickJumpError::InvalidPath(format!(
            "{} is not an absolute path",
            path
        )));
    }

    let mut normalized = PathBuf::new();
    for component in raw.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." above the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
        .into_os_string()
        .into_string()
        .map_err(|_| QuickJumpError::InvalidPath(format!("{} is not UTF-8", path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_is_deterministic() {
        let a = candidate_key("/home/alice/project", 3);
        let b = candidate_key("/home/alice/project", 3);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn longer_candidates_extend_shorter_ones() {
        let path = "/var/www/site";
        for len in 1..MAX_KEY_CAPACITY {
            let short = candidate_key(path, len);
            let long = candidate_key(path, len + 1);
            assert!(long.starts_with(&short));
        }
    }

    #[test]
    fn candidate_length_is_capped() {
        assert_eq!(candidate_key("/x", 100).len(), MAX_KEY_CAPACITY);
        assert_eq!(candidate_key("/x", 0), "");
    }

    #[test]
    fn different_paths_usually_differ() {
        assert_ne!(candidate_key("/a", 8), candidate_key("/b", 8));
    }

    #[test]
    fn normalize_trims_trailing_separators() {
        assert_eq!(normalize_path("/tmp/x/").unwrap(), "/tmp/x");
        assert_eq!(normalize_path("/tmp/x//").unwrap(), "/tmp/x");
        assert_eq!(normalize_path("/").unwrap(), "/");
    }

    #[test]
    fn normalize_resolves_dot_segments() {
        assert_eq!(normalize_path("/tmp/a/../b").unwrap(), "/tmp/b");
        assert_eq!(normalize_path("/tmp/./b").unwrap(), "/tmp/b");
        assert_eq!(normalize_path("/tmp//b").unwrap(), "/tmp/b");
        assert_eq!(normalize_path("/..").unwrap(), "/");
        assert_eq!(normalize_path("/tmp/b/.").unwrap(), "/tmp/b");
    }

    #[test]
    fn normalize_rejects_relative_and_empty() {
        assert!(matches!(
            normalize_path("relative/dir"),
            Err(QuickJumpError::InvalidPath(_))
        ));
        assert!(matches!(
            normalize_path(""),
            Err(QuickJumpError::InvalidPath(_))
        ));
    }

    #[test]
    fn policy_validation() {
        assert!(KeyPolicy::new(0, 3).is_err());
        assert!(KeyPolicy::new(4, 3).is_err());
        assert!(KeyPolicy::new(3, MAX_KEY_CAPACITY + 1).is_err());
        let policy = KeyPolicy::new(3, 5).unwrap();
        assert_eq!(policy.attempts(), 3);
        assert_eq!(policy.lengths().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(KeyPolicy::default().length(), 3);
    }
}
