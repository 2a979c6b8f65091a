//! Domain Models - The vocabulary of Stockpile
//!
//! Identity first, then the entity families built on it.

pub mod clinic;
pub mod identity;
pub mod inventory;
pub mod warehouse;
