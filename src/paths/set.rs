use serde::Serialize;
use std::collections::BTreeSet;

/// The distinct canonical path strings of one face, deduplicated and kept
/// in lexicographic order. Owned by the caller; holds no reference back to
/// the face it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathSet {
    paths: BTreeSet<String>,
}

impl PathSet {
    pub fn new() -> Self {
        PathSet {
            paths: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, path: String) -> bool {
        self.paths.insert(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Exact string membership against the canonical format. A query in a
    /// non-canonical form (wrong padding, separator, or row count) is
    /// simply absent; no parsing or normalization happens here.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Paths in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = PathSet::new();
        assert!(set.insert("01-16-31-46-61".to_string()));
        assert!(set.contains("01-16-31-46-61"));
        assert!(!set.contains("01-16-31-46-62"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut set = PathSet::new();
        assert!(set.insert("05-20-35".to_string()));
        assert!(!set.insert("05-20-35".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_is_lexicographic() {
        let mut set = PathSet::new();
        set.insert("10-20-30".to_string());
        set.insert("02-20-30".to_string());
        set.insert("02-19-30".to_string());

        let paths: Vec<_> = set.iter().collect();
        assert_eq!(paths, vec!["02-19-30", "02-20-30", "10-20-30"]);
    }

    #[test]
    fn test_non_canonical_query_is_absent() {
        let mut set = PathSet::new();
        set.insert("01-16-31".to_string());
        // same numbers, wrong padding / separator / row count
        assert!(!set.contains("1-16-31"));
        assert!(!set.contains("01 16 31"));
        assert!(!set.contains("01-16"));
    }

    #[test]
    fn test_empty_set() {
        let set = PathSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("01-02-03"));
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let mut set = PathSet::new();
        set.insert("03-04".to_string());
        set.insert("01-02".to_string());
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"{"paths":["01-02","03-04"]}"#);
    }
}
