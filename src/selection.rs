// src/selection.rs
// =============================================================================
// The set of file paths the user picked.
//
// Order matters: the aggregated document follows insertion order, not
// alphabetical order. Inserting a path twice keeps the first position.
// =============================================================================

use std::collections::HashSet;

use crate::tree::TreeEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Select all": every File entry, in the order given. Directories are skipped.
    pub fn select_all<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a TreeEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| entry.is_file())
            .map(|entry| entry.path.clone())
            .collect()
    }

    /// Add a path at the end. Returns false if it was already selected.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.paths.push(path);
        true
    }

    /// Returns false if the path wasn't selected.
    pub fn remove(&mut self, path: &str) -> bool {
        if !self.seen.remove(path) {
            return false;
        }
        self.paths.retain(|p| p != path);
        true
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut selection = SelectionSet::new();
        selection.extend(iter);
        selection
    }
}

impl Extend<String> for SelectionSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryKind;

    fn entry(path: &str, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            kind,
        }
    }

    #[test]
    fn test_insertion_order_kept() {
        let selection: SelectionSet = vec!["b.md".to_string(), "a.md".to_string()]
            .into_iter()
            .collect();
        assert_eq!(selection.paths(), &["b.md".to_string(), "a.md".to_string()]);
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut selection = SelectionSet::new();
        assert!(selection.insert("a.md"));
        assert!(selection.insert("b.md"));
        assert!(!selection.insert("a.md"));
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.paths()[0], "a.md");
    }

    #[test]
    fn test_remove_then_reinsert_moves_to_end() {
        let mut selection = SelectionSet::new();
        selection.insert("a.md");
        selection.insert("b.md");
        assert!(selection.remove("a.md"));
        assert!(!selection.remove("a.md"));
        assert_eq!(selection.paths(), &["b.md".to_string()]);
        selection.insert("a.md");
        assert_eq!(selection.paths(), &["b.md".to_string(), "a.md".to_string()]);
    }

    #[test]
    fn test_select_all_skips_directories() {
        let entries = vec![
            entry("src", EntryKind::Directory),
            entry("README.md", EntryKind::File),
            entry("setup.py", EntryKind::File),
        ];
        let selection = SelectionSet::select_all(&entries);
        assert_eq!(
            selection.paths(),
            &["README.md".to_string(), "setup.py".to_string()]
        );
    }

    #[test]
    fn test_empty() {
        assert!(SelectionSet::new().is_empty());
    }
}
