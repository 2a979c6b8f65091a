//! In-Memory Repository Implementation
//!
//! Entities are kept in a `BTreeMap` keyed by an insertion sequence number,
//! with a `HashMap` from entity key to sequence number beside it. Both live
//! in one struct and are only changed together, so listing order and key
//! uniqueness cannot drift apart.

use std::collections::{BTreeMap, HashMap};

use stockpile_domain::model::identity::Identified;
use stockpile_domain::repository::entity_repository::{
    EntityRepository, InvalidValue, RepositoryError,
};

/// In-memory repository for any `Identified` entity
///
/// Single-owner, no interior locking.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Identified> {
    /// seq -> entity, iterated in insertion order
    entries: BTreeMap<u64, T>,
    /// key -> seq
    index: HashMap<T::Key, u64>,
    next_seq: u64,
}

impl<T: Identified> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Borrow the entity stored under `key`
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        let seq = self.index.get(key)?;
        self.entries.get(seq)
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: Identified + Clone> InMemoryRepository<T> {
    /// Build a repository from seed data
    ///
    /// Fails on the first repeated key.
    pub fn from_items<I>(items: I) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut repo = Self::new();
        for item in items {
            repo.add(item)?;
        }
        Ok(repo)
    }
}

impl<T: Identified> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified + Clone> EntityRepository<T> for InMemoryRepository<T> {
    fn add(&mut self, item: T) -> Result<(), RepositoryError> {
        if self.index.contains_key(item.key()) {
            return Err(RepositoryError::duplicate_key(item.key()));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(item.key().clone(), seq);
        self.entries.insert(seq, item);
        Ok(())
    }

    fn get_by_id(&self, key: &T::Key) -> Result<T, RepositoryError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(key))
    }

    fn remove(&mut self, key: &T::Key) -> Result<T, RepositoryError> {
        let seq = self
            .index
            .remove(key)
            .ok_or_else(|| RepositoryError::not_found(key))?;
        self.entries
            .remove(&seq)
            .ok_or_else(|| RepositoryError::not_found(key))
    }

    fn update_field<F>(&mut self, key: &T::Key, mutator: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&mut T) -> Result<(), InvalidValue>,
    {
        let stored = self
            .index
            .get(key)
            .and_then(|seq| self.entries.get_mut(seq))
            .ok_or_else(|| RepositoryError::not_found(key))?;

        let mut draft = stored.clone();
        mutator(&mut draft).map_err(|e| RepositoryError::invalid_value(key, e))?;

        if draft.key() != key {
            return Err(RepositoryError::invalid_value(
                key,
                InvalidValue::new("key", "Key fields are immutable after insert"),
            ));
        }

        *stored = draft;
        Ok(())
    }

    fn get_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    fn find_by<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries.values().find(|item| predicate(item)).cloned()
    }

    fn contains(&self, key: &T::Key) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
