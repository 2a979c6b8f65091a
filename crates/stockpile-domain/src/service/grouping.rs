//! Grouping - Caller-side secondary index
//!
//! Repositories only index by primary key. When a caller needs
//! "all prescriptions of patient X", it builds a `GroupIndex` once from a
//! snapshot. The index is a copy: it is rebuilt after the underlying
//! repository changes, never patched in place.

use std::collections::HashMap;
use std::hash::Hash;

/// Foreign key → entities sharing it, each group in snapshot order
#[derive(Debug, Clone)]
pub struct GroupIndex<K, T> {
    groups: HashMap<K, Vec<T>>,
}

impl<K, T> GroupIndex<K, T>
where
    K: Eq + Hash,
{
    /// Build the index by scanning `items` once
    pub fn build<I, F>(items: I, mut group_key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for item in items {
            groups.entry(group_key(&item)).or_default().push(item);
        }
        Self { groups }
    }

    /// Entities grouped under `key`; empty when there are none
    pub fn get(&self, key: &K) -> &[T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct group keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }
}
