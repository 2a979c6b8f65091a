//! # Stockpile CLI
//!
//! Thin callers over the repository core: seeding, listing, and reporting
//! errors as they happen.

pub mod commands;
pub mod config;
