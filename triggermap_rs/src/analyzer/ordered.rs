//! Insertion-ordered set used for every "first seen wins" list in a report
//! (calls, referenced inputs, SQL targets, notification samples).

use std::collections::HashSet;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless it was already inserted. Returns `true` when added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Keeps only the first `len` items.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.items.len() {
            return;
        }
        for dropped in self.items.drain(len..) {
            self.seen.remove(&dropped);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for OrderedSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let set: OrderedSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.as_slice(), ["b", "a", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("x"));
        assert!(!set.insert("x"));
        assert!(set.contains("x"));
    }

    #[test]
    fn truncate_forgets_dropped_items() {
        let mut set: OrderedSet = ["a", "b", "c"].into_iter().collect();
        set.truncate(1);
        assert_eq!(set.as_slice(), ["a"]);
        assert!(!set.contains("b"));
        assert!(set.insert("b"));
        assert_eq!(set.as_slice(), ["a", "b"]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set: OrderedSet = ["one", "two"].into_iter().collect();
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["one","two"]"#);
    }
}
