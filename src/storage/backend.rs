//! Storage backend abstraction.
//!
//! The [`KeyValueStore`] trait mirrors the small surface the recency store
//! needs: read a string value, replace it, forget it. Values are opaque
//! strings; encoding is the caller's business.

use crate::domain::error::Result;

/// String key-value store.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON file on disk (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map
///
/// # Examples
///
/// ```
/// use vitrine::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("recent", "[]")?;
/// assert_eq!(store.get("recent")?.as_deref(), Some("[]"));
/// # Ok::<(), vitrine::VitrineError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::StorageRead`](crate::VitrineError::StorageRead)
    /// if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is all-or-nothing: readers observe either the old or the new
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}
