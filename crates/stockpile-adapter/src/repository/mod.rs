//! Repository Adapters - Implementations of `EntityRepository`
//!
//! Durable copies are taken with `persistence::JsonFileLog`.

pub mod in_memory;
