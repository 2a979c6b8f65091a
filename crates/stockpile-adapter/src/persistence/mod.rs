//! Persistence Adapters - Snapshot files
//!
//! A repository is mirrored to disk by capturing `get_all()` into a
//! `JsonFileLog` and saving it.

pub mod error;
pub mod json_file_log;
