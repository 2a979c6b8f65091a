//! # Stockpile Adapter Layer
//!
//! Implementations of the domain ports.
//!
//! ## Structure
//!
//! - `repository/` - `EntityRepository` implementations
//! - `persistence/` - Snapshot files (JSON)

pub mod persistence;
pub mod repository;

pub use persistence::error::PersistenceError;
pub use persistence::json_file_log::{JsonFileLog, LoadOutcome, WriteMode};
pub use repository::in_memory::InMemoryRepository;
