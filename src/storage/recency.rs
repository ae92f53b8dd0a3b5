//! Recently-viewed apps.
//!
//! Split in two layers:
//!
//! - [`RecencyList`]: the pure update rule (move to front, dedupe, truncate),
//!   testable without any storage medium.
//! - [`RecencyStore`]: owns a list plus a [`KeyValueStore`] and writes the whole
//!   list back after every change.
//!
//! The persisted value is a JSON array of [`App`] records, most-recent-first.

use crate::domain::error::{Result, VitrineError};
use crate::domain::App;
use crate::storage::backend::KeyValueStore;

/// Bounded, deduplicated, most-recently-used list of apps.
///
/// Invariants:
/// - no two entries share an `app_id`
/// - the most recently recorded app is first
/// - `len() <= capacity()`
///
/// A capacity of zero makes every [`record`](Self::record) a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyList {
    capacity: usize,
    entries: Vec<App>,
}

impl RecencyList {
    /// Creates an empty list holding at most `capacity` apps.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Builds a list from entries ordered most-recent-first.
    ///
    /// Entries that repeat an earlier `app_id` are dropped, then the list is
    /// truncated to `capacity`.
    #[must_use]
    pub fn from_entries(capacity: usize, entries: Vec<App>) -> Self {
        let mut kept: Vec<App> = Vec::with_capacity(entries.len().min(capacity));
        for app in entries {
            if kept.len() == capacity {
                break;
            }
            if kept.iter().all(|a| a.app_id != app.app_id) {
                kept.push(app);
            }
        }
        Self {
            capacity,
            entries: kept,
        }
    }

    /// Moves `app` to the front, removing any earlier occurrence, then evicts
    /// from the tail down to capacity.
    ///
    /// Returns `true` if the list changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::domain::App;
    /// use vitrine::storage::RecencyList;
    ///
    /// let app = |id: &str| App::new(id, id, "#000000", "", "");
    /// let mut list = RecencyList::new(3);
    /// for id in ["A", "B", "A", "C", "D"] {
    ///     list.record(app(id));
    /// }
    /// let ids: Vec<_> = list.entries().iter().map(|a| a.app_id.as_str()).collect();
    /// assert_eq!(ids, ["D", "C", "A"]);
    /// ```
    pub fn record(&mut self, app: App) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.entries.first() == Some(&app) {
            return false;
        }

        self.entries.retain(|a| a.app_id != app.app_id);
        self.entries.insert(0, app);
        self.entries.truncate(self.capacity);
        true
    }

    /// Entries, most-recent-first.
    #[must_use]
    pub fn entries(&self) -> &[App] {
        &self.entries
    }

    /// Entries, most-recent-first, without the app whose id is `exclude`.
    #[must_use]
    pub fn visible(&self, exclude: Option<&str>) -> Vec<App> {
        self.entries
            .iter()
            .filter(|a| exclude.map_or(true, |id| a.app_id != id))
            .cloned()
            .collect()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recently-viewed list persisted under a fixed key.
///
/// Loaded once on [`open`](Self::open); every [`record_view`](Self::record_view)
/// writes the full list back with a single `set`.
pub struct RecencyStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    list: RecencyList,
}

impl RecencyStore {
    /// Loads the list stored under `key`.
    ///
    /// A missing key yields an empty list. An unreadable medium or a value that
    /// is not a JSON array of apps is logged and also yields an empty list; this
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::storage::{MemoryStore, RecencyStore};
    ///
    /// let backend = MemoryStore::with_entry("recent", "not json");
    /// let store = RecencyStore::open(Box::new(backend), "recent", 5);
    /// assert!(store.list(None).is_empty());
    /// ```
    pub fn open(backend: Box<dyn KeyValueStore>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let _span = tracing::debug_span!("recency_open", key = %key, capacity = capacity).entered();

        let entries = match Self::read_entries(backend.as_ref(), &key) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "recently viewed list unreadable, starting empty");
                Vec::new()
            }
        };

        let list = RecencyList::from_entries(capacity, entries);
        tracing::debug!(loaded = list.len(), "recently viewed list loaded");

        Self { backend, key, list }
    }

    fn read_entries(backend: &dyn KeyValueStore, key: &str) -> Result<Vec<App>> {
        let Some(raw) = backend.get(key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw)
            .map_err(|e| VitrineError::StorageRead(format!("invalid recently viewed list: {e}")))
    }

    /// Records that `app` was viewed and persists the result.
    ///
    /// Every call with a non-zero capacity performs exactly one write, even
    /// when the app was already at the front. With capacity zero nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Storage`] if the write fails. The in-memory list
    /// keeps the update either way.
    pub fn record_view(&mut self, app: App) -> Result<()> {
        let _span = tracing::debug_span!("recency_record_view", app_id = %app.app_id).entered();

        if self.list.capacity() == 0 {
            return Ok(());
        }
        let changed = self.list.record(app);

        let json = serde_json::to_string(self.list.entries())
            .map_err(|e| VitrineError::Storage(format!("failed to encode recently viewed list: {e}")))?;
        self.backend.set(&self.key, &json)?;

        tracing::debug!(len = self.list.len(), changed = changed, "recently viewed list persisted");
        Ok(())
    }

    /// Recently viewed apps, most-recent-first, without `exclude` if given.
    #[must_use]
    pub fn list(&self, exclude: Option<&str>) -> Vec<App> {
        self.list.visible(exclude)
    }

    /// Storage key the list is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for RecencyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecencyStore")
            .field("key", &self.key)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}
