//! JsonFileLog - Durable snapshot of a repository in a JSON file
//!
//! The log holds an ordered sequence of entities and mirrors it to one
//! file as a pretty-printed JSON array. `save` overwrites the whole file,
//! `load` replaces the whole sequence. Nothing is merged or appended.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{PersistenceError, Result};

/// How `save` puts bytes on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and write the target directly. A failure midway can leave
    /// a partial file.
    #[default]
    InPlace,
    /// Write `<file>.tmp`, sync it, then rename it over the target
    Atomic,
}

/// What `load` found at the bound path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file held a sequence of `count` records (possibly zero)
    Loaded { count: usize },
    /// The file held JSON `null`
    NoData,
    /// No file at the bound path
    Missing,
}

impl LoadOutcome {
    /// Whether a sequence was actually read from disk
    pub fn found_data(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Ordered entity sequence bound to one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileLog<T> {
    path: PathBuf,
    entries: Vec<T>,
    write_mode: WriteMode,
}

impl<T> JsonFileLog<T> {
    /// Create an empty log bound to `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            write_mode: WriteMode::default(),
        }
    }

    /// Builder: choose how `save` writes
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Append one entity to the held sequence
    pub fn add(&mut self, item: T) {
        self.entries.push(item);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the held sequence with `snapshot`, typically
    /// `repository.get_all()`
    pub fn capture(&mut self, snapshot: impl IntoIterator<Item = T>) {
        self.entries = snapshot.into_iter().collect();
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl<T: Clone> JsonFileLog<T> {
    /// Copy of the held sequence
    pub fn get_all(&self) -> Vec<T> {
        self.entries.clone()
    }
}

impl<T: Serialize> JsonFileLog<T> {
    /// Write the held sequence to the bound path, replacing the file
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(&self.entries).map_err(PersistenceError::Serialization)?;

        match self.write_mode {
            WriteMode::InPlace => fs::write(&self.path, &json)
                .map_err(|e| PersistenceError::io("write", &self.path, e))?,
            WriteMode::Atomic => write_atomic(&self.path, &json)?,
        }

        debug!(
            path = %self.path.display(),
            count = self.entries.len(),
            mode = ?self.write_mode,
            "Saved snapshot"
        );
        Ok(())
    }

    /// `capture` then `save`
    pub fn save_snapshot(&mut self, snapshot: impl IntoIterator<Item = T>) -> Result<()> {
        self.capture(snapshot);
        self.save()
    }
}

impl<T: DeserializeOwned> JsonFileLog<T> {
    /// Replace the held sequence with the file's contents
    ///
    /// A missing file or a `null` document clears the sequence and is
    /// reported through [`LoadOutcome`]. Malformed content is an error and
    /// leaves the held sequence as it was.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Snapshot file not found, nothing loaded");
                self.entries.clear();
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(PersistenceError::io("read", &self.path, e)),
        };

        let parsed: Option<Vec<T>> =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Deserialization {
                path: self.path.clone(),
                source,
            })?;

        match parsed {
            Some(entries) => {
                let count = entries.len();
                self.entries = entries;
                debug!(path = %self.path.display(), count, "Loaded snapshot");
                Ok(LoadOutcome::Loaded { count })
            }
            None => {
                warn!(path = %self.path.display(), "Snapshot file holds no data");
                self.entries.clear();
                Ok(LoadOutcome::NoData)
            }
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    let written = File::create(&temp_path)
        .map_err(|e| PersistenceError::io("create temporary file", &temp_path, e))
        .and_then(|mut file| {
            file.write_all(bytes)
                .map_err(|e| PersistenceError::io("write temporary file", &temp_path, e))?;
            file.sync_all()
                .map_err(|e| PersistenceError::io("sync temporary file", &temp_path, e))
        })
        .and_then(|()| {
            fs::rename(&temp_path, path).map_err(|e| PersistenceError::io("replace", path, e))
        });

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}
