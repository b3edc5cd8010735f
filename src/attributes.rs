//! Tag attribute access and the decision whitelist
//!
//! `AttributeSet` is the owned stand-in for the host's tag lookup: a
//! string-keyed map queried by exact key. `Whitelist` collects the tag keys
//! that influenced a cost decision so the host can decide which tag data to
//! retain per edge.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// An owned tag collection. Keys are unique, order is irrelevant.
///
/// Equality compares the full collection pair-wise, independent of
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    tags: FxHashMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> AttributeSet {
        AttributeSet::default()
    }

    /// Build from literal pairs; later duplicates overwrite earlier ones.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> AttributeSet {
        pairs.iter().copied().collect()
    }

    /// Get a tag value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> AttributeSet {
        AttributeSet {
            tags: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl FromIterator<(String, String)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> AttributeSet {
        AttributeSet {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Build an [AttributeSet] from literal key/value pairs.
#[macro_export]
macro_rules! tags {
    {} => { $crate::AttributeSet::new() };
    {$( $k:literal : $v:literal ),+ $(,)?} => {
        $crate::AttributeSet::from_pairs(&[ $( ($k, $v) ),+ ])
    };
}

/// The set of tag keys that influenced a cost decision.
///
/// Owned by the caller and passed by reference into the evaluator; grows
/// monotonically during one evaluation call and must not be shared across
/// concurrent evaluations of different tag sets. Keys come from the fixed
/// tag vocabulary the profiles know about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    keys: FxHashSet<&'static str>,
}

impl Whitelist {
    pub fn new() -> Whitelist {
        Whitelist::default()
    }

    /// Record a key as influential.
    pub fn record(&mut self, key: &'static str) {
        self.keys.insert(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sorted snapshot, for stable output.
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.keys.iter().copied().collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_has() {
        let tags = tags! {"highway": "residential", "name": "Main Street"};
        assert_eq!(tags.get("highway"), Some("residential"));
        assert_eq!(tags.get("surface"), None);
        assert!(tags.has("name"));
        assert!(!tags.has("oneway"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let a = AttributeSet::from_pairs(&[("highway", "residential"), ("oneway", "yes")]);
        let b = AttributeSet::from_pairs(&[("oneway", "yes"), ("highway", "residential")]);
        assert_eq!(a, b);

        let c = AttributeSet::from_pairs(&[("highway", "residential")]);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_set() {
        let tags = tags! {};
        assert!(tags.is_empty());
        assert_eq!(tags.get("highway"), None);
    }

    #[test]
    fn whitelist_grows_and_dedupes() {
        let mut whitelist = Whitelist::new();
        assert!(whitelist.is_empty());
        whitelist.record("highway");
        whitelist.record("oneway");
        whitelist.record("highway");
        assert_eq!(whitelist.len(), 2);
        assert!(whitelist.contains("highway"));
        assert!(!whitelist.contains("junction"));
        assert_eq!(whitelist.sorted(), vec!["highway", "oneway"]);
    }
}
