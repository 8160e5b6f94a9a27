use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durable string-keyed preference slot. One writer at a time, last
/// write wins; each key is independent, so there is no multi-key
/// transaction to speak of.
pub trait PrefStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// In-memory slot for tests and headless runs.
#[derive(Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.store(key, value);
        storage
    }
}

impl PrefStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// On-disk shape: a flat string map, one entry per preference key.
#[derive(Default, Serialize, Deserialize)]
struct SlotFile(HashMap<String, String>);

#[derive(Debug, Error)]
enum FileStorageError {
    #[error("reading preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing preference file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat JSON map on disk, standing in for the browser's key-value slot.
///
/// Failures here are never surfaced to callers: a missing or corrupt
/// file degrades to "slot absent" (the documented default-wins path),
/// and write errors are logged and dropped.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<SlotFile, FileStorageError> {
        if !self.path.exists() {
            return Ok(SlotFile::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(&self, map: &SlotFile) -> Result<(), FileStorageError> {
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl PrefStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(map) => map.0.get(key).cloned(),
            Err(err) => {
                log::warn!("{}: {err}; treating slot as absent", self.path.display());
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(err) => {
                log::warn!("{}: {err}; rewriting from scratch", self.path.display());
                SlotFile::default()
            }
        };
        map.0.insert(key.to_string(), value.to_string());
        if let Err(err) = self.write_map(&map) {
            log::warn!("{}: {err}; preference not persisted", self.path.display());
        }
    }
}
