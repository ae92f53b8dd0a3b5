//! JSON file-based key-value store.
//!
//! All keys live in one human-readable JSON file. The whole map is kept in
//! memory and the file is rewritten on every change using an atomic write
//! (write-to-temp + rename), so a crash never leaves a half-written file.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - file loaded once on open
//! - **Write**: O(n) - serializes and writes the entire map
//! - **Best for**: a handful of small values written on user actions

use crate::domain::error::{Result, VitrineError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values by key.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// # Thread Safety
///
/// `Send` but not `Sync`: owned by the event loop and mutated from one thread.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "recent_apps": "[{\"app_id\":\"slack\",\"name\":\"Slack\",...}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file.
    data: StorageData,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// A missing file yields an empty store; the file is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails ([`VitrineError::Io`])
    /// - The file exists but cannot be read or decoded ([`VitrineError::StorageRead`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vitrine::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/vitrine/storage.json"))?;
    /// # Ok::<(), vitrine::VitrineError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no store file yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "JSON store opened");

        Ok(Self { file_path, data })
    }

    /// Opens the store, discarding an unreadable file instead of failing.
    ///
    /// A corrupt file is logged and treated as empty; it is replaced on the
    /// next write.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    pub fn open_or_reset(file_path: PathBuf) -> Result<Self> {
        match Self::open(file_path.clone()) {
            Err(VitrineError::StorageRead(reason)) => {
                tracing::warn!(path = ?file_path, reason = %reason, "discarding unreadable store file");
                Ok(Self {
                    file_path,
                    data: StorageData::default(),
                })
            }
            other => other,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VitrineError::StorageRead(format!("failed to read {}: {e}", path.display())))?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| VitrineError::StorageRead(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Writes the whole map to disk atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&self) -> Result<()> {
        let _span = tracing::debug_span!("json_store_save", path = ?self.file_path).entered();

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| VitrineError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)
            .map_err(|e| VitrineError::Storage(format!("failed to write {}: {e}", tmp_path.display())))?;
        std::fs::rename(&tmp_path, &self.file_path)
            .map_err(|e| VitrineError::Storage(format!("failed to replace {}: {e}", self.file_path.display())))?;

        tracing::trace!("store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.data.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_to_file() {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => self.data.entries.insert(key.to_string(), old),
                None => self.data.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.data.entries.remove(key).is_none() {
            return Ok(());
        }
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        store.set("other", "x").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("missing").unwrap();

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(path).unwrap_err();
        assert!(matches!(err, VitrineError::StorageRead(_)));
    }

    #[test]
    fn open_or_reset_discards_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();

        let mut store = JsonFileStore::open_or_reset(path.clone()).unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }
}
