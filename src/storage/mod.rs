//! Storage layer for locally persisted state.
//!
//! Vitrine persists exactly one thing: the recently-viewed list. It is kept
//! under a fixed key in a small key-value store, the terminal counterpart of a
//! browser's local storage.
//!
//! # Modules
//!
//! - `backend`: Key-value store trait
//! - `json`: Single-file JSON store with atomic writes
//! - `memory`: In-process store, used when nothing should touch disk
//! - `recency`: Bounded most-recently-used list and its persisted holder

pub mod backend;
pub mod json;
pub mod memory;
pub mod recency;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use recency::{RecencyList, RecencyStore};
