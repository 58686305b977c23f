//! Ordered, deduplicated directory search paths

use serde::Serialize;
use std::path::{Path, PathBuf};

/// An ordered set of absolute directory paths.
///
/// Every entry is slash-normalized and terminated with exactly one trailing
/// slash. Entries are unique under the host filesystem's matching rule
/// (exact on POSIX, ASCII-case-insensitive on Windows), and insertion order
/// is preserved: earlier entries are higher priority when consumers search
/// for an existing file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory candidate unless an equal entry is already present.
    ///
    /// The candidate is normalized first (backslashes become forward slashes,
    /// trailing separators collapse to exactly one). If an equal entry
    /// exists the call is a no-op, so the first-seen entry keeps its
    /// priority. Empty candidates are ignored.
    pub fn push(&mut self, candidate: impl AsRef<str>) {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            return;
        }

        let normalized = normalize_dir(candidate);
        if self.entries.iter().any(|e| entries_equal(e, &normalized)) {
            return;
        }

        self.entries.push(normalized);
    }

    /// Iterate entries in priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries as a slice, highest priority first
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search entries in priority order and return the first path where
    /// `relative` exists on disk.
    pub fn first_existing(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        let relative = relative.as_ref();
        self.entries
            .iter()
            .map(|entry| Path::new(entry).join(relative))
            .find(|path| path.exists())
    }
}

/// Normalize a directory path: forward slashes only, exactly one trailing
/// slash, no doubled trailing separators.
pub(crate) fn normalize_dir(candidate: &str) -> String {
    let slashed = candidate.replace('\\', "/");
    let trimmed = slashed.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(windows)]
fn entries_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(not(windows))]
fn entries_equal(a: &str, b: &str) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_normalizes_separators_and_trailing_slash() {
        let mut list = PathList::new();
        list.push(r"C:\Users\me");
        assert_eq!(list.as_slice(), ["C:/Users/me/"]);
    }

    #[test]
    fn push_collapses_doubled_trailing_separators() {
        let mut list = PathList::new();
        list.push("/etc/xdg//");
        assert_eq!(list.as_slice(), ["/etc/xdg/"]);
    }

    #[test]
    fn duplicate_candidates_are_ignored() {
        let mut list = PathList::new();
        list.push("/opt/cfg");
        list.push("/opt/cfg/");
        list.push("/opt/cfg//");
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice(), ["/opt/cfg/"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut list = PathList::new();
        list.push("/a");
        list.push("/b");
        list.push("/c");
        assert_eq!(list.as_slice(), ["/a/", "/b/", "/c/"]);
    }

    #[test]
    fn first_seen_entry_wins() {
        let mut list = PathList::new();
        list.push("/a");
        list.push("/b");
        list.push("/a/");
        assert_eq!(list.as_slice(), ["/a/", "/b/"]);
    }

    #[test]
    fn root_stays_a_single_slash() {
        let mut list = PathList::new();
        list.push("/");
        assert_eq!(list.as_slice(), ["/"]);
    }

    #[test]
    fn empty_candidate_is_a_noop() {
        let mut list = PathList::new();
        list.push("");
        assert!(list.is_empty());
    }

    #[cfg(windows)]
    #[test]
    fn windows_matching_is_case_insensitive() {
        let mut list = PathList::new();
        list.push(r"C:\Users\Me");
        list.push("c:/users/me/");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn first_existing_respects_priority_order() {
        let high = tempfile::tempdir().unwrap();
        let low = tempfile::tempdir().unwrap();
        std::fs::write(high.path().join("theme.conf"), "a").unwrap();
        std::fs::write(low.path().join("theme.conf"), "b").unwrap();

        let mut list = PathList::new();
        list.push(high.path().to_string_lossy());
        list.push(low.path().to_string_lossy());

        let found = list.first_existing("theme.conf").unwrap();
        assert!(found.starts_with(high.path()));
    }

    #[test]
    fn first_existing_skips_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme.conf"), "x").unwrap();

        let mut list = PathList::new();
        list.push("/nonexistent-sysfetch-test");
        list.push(dir.path().to_string_lossy());

        let found = list.first_existing("theme.conf").unwrap();
        assert!(found.starts_with(dir.path()));
    }
}
