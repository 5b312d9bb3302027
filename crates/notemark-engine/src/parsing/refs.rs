//! Link reference definitions collected during block scanning.

use std::collections::HashMap;

/// Target of a `[label]: href "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub href: String,
    pub title: Option<String>,
}

/// Document-wide reference map. The first definition of a label wins.
#[derive(Debug, Default)]
pub struct RefMap {
    defs: HashMap<String, LinkRef>,
}

impl RefMap {
    /// Case-folds a label and collapses internal whitespace.
    pub fn normalize_label(label: &str) -> String {
        label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Records a definition; returns false if the label was already taken.
    pub fn insert(&mut self, label: &str, target: LinkRef) -> bool {
        let key = Self::normalize_label(label);
        if key.is_empty() || self.defs.contains_key(&key) {
            return false;
        }
        self.defs.insert(key, target);
        true
    }

    pub fn get(&self, label: &str) -> Option<&LinkRef> {
        self.defs.get(&Self::normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(href: &str) -> LinkRef {
        LinkRef {
            href: href.into(),
            title: None,
        }
    }

    #[test]
    fn labels_match_case_and_space_insensitively() {
        let mut refs = RefMap::default();
        refs.insert("Foo  Bar", target("/a"));
        assert_eq!(refs.get("foo bar"), Some(&target("/a")));
        assert_eq!(refs.get(" FOO\nbar "), Some(&target("/a")));
    }

    #[test]
    fn first_definition_wins() {
        let mut refs = RefMap::default();
        assert!(refs.insert("x", target("/first")));
        assert!(!refs.insert("X", target("/second")));
        assert_eq!(refs.get("x").map(|r| r.href.as_str()), Some("/first"));
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn blank_labels_are_rejected() {
        let mut refs = RefMap::default();
        assert!(!refs.insert("  ", target("/a")));
        assert!(refs.is_empty());
    }
}
