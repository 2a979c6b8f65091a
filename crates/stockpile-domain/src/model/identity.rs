//! Identity - What makes two records "the same" entity
//!
//! Every entity stored in a repository exposes a key through
//! [`Identified`]. The key is fixed at construction: repositories
//! index by it and refuse updates that would change it.

use core::fmt;
use core::hash::Hash;

use serde::{Deserialize, Serialize};

/// Capability of exposing a unique, immutable key
///
/// The repository never looks at any other field of `T`.
pub trait Identified {
    /// Key type. `Display` is used for error messages.
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// The entity's identity
    fn key(&self) -> &Self::Key;
}

/// Identifier for stock items (inventory log entries, warehouse items)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a clinic patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(u32);

impl PatientId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrescriptionId(u32);

impl PrescriptionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PrescriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
