//! Field-wise config merging.
//!
//! Layered config (global then project) merges with "later wins" semantics.
//! `None` means "not specified" and never clobbers an explicit value.

use revet_checks::ChecksConfig;
use std::collections::HashMap;
use std::hash::Hash;

/// Merge two values, with `other` taking precedence where specified.
pub trait Merge {
    fn merge(self, other: Self) -> Self;
}

impl<T> Merge for Option<T> {
    fn merge(self, other: Self) -> Self {
        other.or(self)
    }
}

impl<K: Eq + Hash, V> Merge for HashMap<K, V> {
    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Merge for ChecksConfig {
    fn merge(self, other: Self) -> Self {
        ChecksConfig(self.0.merge(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_merge_prefers_other() {
        assert_eq!(Some(1).merge(Some(2)), Some(2));
        assert_eq!(Some(1).merge(None), Some(1));
        assert_eq!(None.merge(Some(2)), Some(2));
        assert_eq!(None::<i32>.merge(None), None);
    }

    #[test]
    fn test_hashmap_merge_replaces_entries() {
        let mut a = HashMap::new();
        a.insert("x", 1);
        a.insert("y", 2);
        let mut b = HashMap::new();
        b.insert("y", 20);

        let merged = a.merge(b);
        assert_eq!(merged.get("x"), Some(&1));
        assert_eq!(merged.get("y"), Some(&20));
    }
}
