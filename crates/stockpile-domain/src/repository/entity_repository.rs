//! Entity Repository - Abstract keyed storage for any `Identified` entity
//!
//! This trait defines what callers may do with a collection of entities.
//! How the entities are held (memory, file mirror) is not our concern here.

use core::fmt;

use thiserror::Error;

use crate::model::identity::Identified;

/// A proposed field change that failed its precondition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct InvalidValue {
    /// Name of the field the mutator tried to change
    pub field: &'static str,
    pub reason: String,
}

impl InvalidValue {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Insert with an identity that is already stored
    #[error("Entity with key {key} already exists")]
    DuplicateKey { key: String },

    /// Lookup, update or removal of an unknown key
    #[error("Entity with key {key} not found")]
    NotFound { key: String },

    /// A mutator rejected the change; the stored entity is unchanged
    #[error("Invalid update for entity {key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: InvalidValue,
    },
}

impl RepositoryError {
    pub fn duplicate_key(key: &impl fmt::Display) -> Self {
        Self::DuplicateKey {
            key: key.to_string(),
        }
    }

    pub fn not_found(key: &impl fmt::Display) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub fn invalid_value(key: &impl fmt::Display, source: InvalidValue) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            source,
        }
    }
}

/// Entity Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must guarantee:
/// - at most one entity per key,
/// - listing operations follow insertion order,
/// - a failed operation leaves stored state untouched.
///
/// Reads return owned copies, so callers can never reach in and change a
/// stored key.
pub trait EntityRepository<T>
where
    T: Identified + Clone,
{
    /// Insert `item` under its key. Fails with `DuplicateKey` if the key is taken.
    fn add(&mut self, item: T) -> Result<(), RepositoryError>;

    /// Copy of the entity stored under `key`
    fn get_by_id(&self, key: &T::Key) -> Result<T, RepositoryError>;

    /// Delete the entity stored under `key` and hand it back
    fn remove(&mut self, key: &T::Key) -> Result<T, RepositoryError>;

    /// Apply a validated change to the entity stored under `key`
    ///
    /// The mutator works on a copy. The stored entity is replaced only if
    /// the mutator succeeds and leaves the key as it was.
    fn update_field<F>(&mut self, key: &T::Key, mutator: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&mut T) -> Result<(), InvalidValue>;

    /// Snapshot of every entity, in insertion order
    fn get_all(&self) -> Vec<T>;

    /// First entity (in insertion order) matching `predicate`
    fn find_by<P>(&self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool;

    /// Check if an entity is stored under `key`
    fn contains(&self, key: &T::Key) -> bool;

    /// Number of stored entities
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entity matching `predicate`, in insertion order
    fn find_all_by<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.get_all()
            .into_iter()
            .filter(|item| predicate(item))
            .collect()
    }

    /// Remove the first entity matching `predicate`
    ///
    /// `Ok(None)` when nothing matches. An error from `remove` on the
    /// matched key is returned as is.
    fn remove_by<P>(&mut self, predicate: P) -> Result<Option<T>, RepositoryError>
    where
        P: FnMut(&T) -> bool,
    {
        let Some(found) = self.find_by(predicate) else {
            return Ok(None);
        };
        self.remove(found.key()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::clinic::Patient;
    use crate::model::identity::PatientId;

    /// Vec-backed implementation for exercising the provided methods
    struct VecRepo<T> {
        items: Vec<T>,
        reject_removal: bool,
    }

    impl<T> VecRepo<T> {
        fn new() -> Self {
            Self {
                items: Vec::new(),
                reject_removal: false,
            }
        }
    }

    impl<T: Identified + Clone> EntityRepository<T> for VecRepo<T> {
        fn add(&mut self, item: T) -> Result<(), RepositoryError> {
            if self.contains(item.key()) {
                return Err(RepositoryError::duplicate_key(item.key()));
            }
            self.items.push(item);
            Ok(())
        }

        fn get_by_id(&self, key: &T::Key) -> Result<T, RepositoryError> {
            self.items
                .iter()
                .find(|i| i.key() == key)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found(key))
        }

        fn remove(&mut self, key: &T::Key) -> Result<T, RepositoryError> {
            if self.reject_removal {
                return Err(RepositoryError::invalid_value(
                    key,
                    InvalidValue::new("key", "Removal is disabled"),
                ));
            }
            let pos = self
                .items
                .iter()
                .position(|i| i.key() == key)
                .ok_or_else(|| RepositoryError::not_found(key))?;
            Ok(self.items.remove(pos))
        }

        fn update_field<F>(&mut self, key: &T::Key, mutator: F) -> Result<(), RepositoryError>
        where
            F: FnOnce(&mut T) -> Result<(), InvalidValue>,
        {
            let slot = self
                .items
                .iter_mut()
                .find(|i| i.key() == key)
                .ok_or_else(|| RepositoryError::not_found(key))?;
            let mut draft = slot.clone();
            mutator(&mut draft).map_err(|e| RepositoryError::invalid_value(key, e))?;
            *slot = draft;
            Ok(())
        }

        fn get_all(&self) -> Vec<T> {
            self.items.clone()
        }

        fn find_by<P>(&self, mut predicate: P) -> Option<T>
        where
            P: FnMut(&T) -> bool,
        {
            self.items.iter().find(|i| predicate(i)).cloned()
        }

        fn contains(&self, key: &T::Key) -> bool {
            self.items.iter().any(|i| i.key() == key)
        }

        fn len(&self) -> usize {
            self.items.len()
        }
    }

    fn seeded() -> VecRepo<Patient> {
        let mut repo = VecRepo::new();
        repo.add(Patient::new(PatientId::new(1), "Kwame Nkrumah", 28, "Male"))
            .unwrap();
        repo.add(Patient::new(PatientId::new(2), "Kofi Baboni", 23, "Male"))
            .unwrap();
        repo.add(Patient::new(PatientId::new(3), "Ella Akosuah", 80, "Female"))
            .unwrap();
        repo
    }

    #[test]
    fn test_find_all_by() {
        let repo = seeded();

        let men = repo.find_all_by(|p| p.gender() == "Male");
        let names: Vec<_> = men.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Kwame Nkrumah", "Kofi Baboni"]);
    }

    #[test]
    fn test_remove_by() {
        let mut repo = seeded();

        let removed = repo.remove_by(|p| p.age() > 70).unwrap().unwrap();
        assert_eq!(removed.id(), PatientId::new(3));
        assert_eq!(repo.len(), 2);

        // Nothing left to match
        assert!(repo.remove_by(|p| p.age() > 70).unwrap().is_none());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_remove_by_reports_failed_removal() {
        let mut repo = seeded();
        repo.reject_removal = true;

        let err = repo.remove_by(|p| p.age() > 70).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidValue { .. }));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_is_empty() {
        let repo: VecRepo<Patient> = VecRepo::new();
        assert!(repo.is_empty());
        assert!(!seeded().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = RepositoryError::not_found(&PatientId::new(99));
        assert_eq!(err.to_string(), "Entity with key 99 not found");

        let err = RepositoryError::invalid_value(
            &PatientId::new(1),
            InvalidValue::new("quantity", "cannot be negative"),
        );
        assert_eq!(
            err.to_string(),
            "Invalid update for entity 1: invalid quantity: cannot be negative"
        );
    }
}
