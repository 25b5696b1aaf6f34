//! Key-value "local storage" for the portal.
//!
//! Values are opaque strings. The file-backed store keeps every key in a
//! single JSON object and rewrites the whole file on each mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::StorageError;

pub const STORAGE_FILE: &str = "storage.json";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

// ── In-memory ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ── File-backed ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens `<dir>/storage.json`. A missing or malformed file yields an
    /// empty store; the next write replaces it.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(STORAGE_FILE);
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "storage file unreadable, starting empty");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "storage file could not be read");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), keys = entries.len(), "storage opened");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
