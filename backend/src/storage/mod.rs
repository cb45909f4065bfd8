//! Durable key-value storage
//!
//! All user state persists as a handful of JSON documents in a flat
//! key-value store, one document per key. `FileStorage` is the production
//! backend (one file per key under the configured data directory);
//! `MemoryStorage` backs tests and ephemeral runs.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Flat key-value storage for serialized JSON documents
pub trait StorageBackend: Send + Sync {
    /// Fetch the raw document stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous document
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the document under `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys become file names, so restrict them to a safe alphabet
fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    anyhow::ensure!(ok, "invalid storage key: {key:?}");
    Ok(())
}

// ============================================================================
// File Storage
// ============================================================================

/// File-backed storage: one `<key>.json` file per key.
///
/// Writes go to a temp file followed by a rename, so a crash mid-write
/// leaves the previous document intact.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open the data directory, creating it if needed
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
        Ok(Self { data_dir })
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}

// ============================================================================
// Memory Storage
// ============================================================================

/// In-memory storage, used by tests and available for ephemeral runs
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means a panic elsewhere; the map is still usable
        self.entries.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries().remove(key);
        Ok(())
    }
}
