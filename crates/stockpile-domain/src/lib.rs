//! # Stockpile Domain Layer
//!
//! Entities, identity and repository ports. No I/O happens in this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Identified + entities                        ││
//! │  │  repository/ - EntityRepository port + error taxonomy       ││
//! │  │  service/    - Quantity mutators, caller-side grouping      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage lives in `stockpile-adapter`. Swapping the in-memory store for
//! another implementation of [`EntityRepository`] does not touch this crate.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    clinic::{Patient, Prescription},
    identity::{Identified, ItemId, PatientId, PrescriptionId},
    inventory::{InventoryItem, StockItem},
    warehouse::{ElectronicItem, GroceryItem},
};

pub use repository::entity_repository::{EntityRepository, InvalidValue, RepositoryError};

pub use service::{
    grouping::GroupIndex,
    stock::{adjust_quantity, set_quantity, StockRepositoryExt},
};
