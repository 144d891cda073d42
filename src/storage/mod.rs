//! # Identifier Source
//!
//! The carousel's input is a JSON array of product handles kept under
//! [`STORAGE_KEY`] in a string key-value store, appended to by product pages
//! as the shopper browses. This module reads that list back, newest first.
//!
//! Reading never fails from the caller's point of view: a missing key, a value
//! that is not a JSON array of strings, or a store error all read as "nothing
//! viewed yet".

mod file;

pub use file::JsonFileStore;

use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Key the handle list is persisted under.
pub const STORAGE_KEY: &str = "recently_viewed_products";

/// A string key-value store scoped to one site, like browser local storage.
pub trait IdentifierStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `value` under [`STORAGE_KEY`].
    pub fn with_raw(value: impl Into<String>) -> Self {
        let store = Self::new();
        store.insert(STORAGE_KEY, value);
        store
    }

    /// Creates a store holding `handles` JSON-encoded under [`STORAGE_KEY`].
    pub fn with_handles<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let handles: Vec<String> = handles.into_iter().map(Into::into).collect();
        // A Vec<String> always serializes.
        let raw = serde_json::to_string(&handles).unwrap_or_else(|_| "[]".to_string());
        Self::with_raw(raw)
    }

    fn insert(&self, key: &str, value: impl Into<String>) {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.into());
    }
}

impl IdentifierStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Returns the last `limit` stored handles, most recently viewed first.
pub fn read_recent(store: &dyn IdentifierStore, limit: usize) -> Vec<String> {
    let handles = load_handles(store);
    let start = handles.len().saturating_sub(limit);
    let recent: Vec<String> = handles[start..].iter().rev().cloned().collect();
    debug!(stored = handles.len(), count = recent.len(), "Read recent handles");
    recent
}

/// Appends `handle` to the stored list, moving an earlier occurrence to the
/// end and dropping the oldest entries beyond `cap`.
///
/// A stored value that cannot be parsed is replaced by a fresh list.
pub fn record_view(
    store: &dyn IdentifierStore,
    handle: &str,
    cap: usize,
) -> Result<Vec<String>, StorageError> {
    let mut handles = load_handles(store);
    handles.retain(|h| h != handle);
    handles.push(handle.to_string());
    let excess = handles.len().saturating_sub(cap);
    handles.drain(..excess);

    let raw = serde_json::to_string(&handles)?;
    store.set_item(STORAGE_KEY, &raw)?;
    debug!(handle, count = handles.len(), "Recorded view");
    Ok(handles)
}

fn load_handles(store: &dyn IdentifierStore) -> Vec<String> {
    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            debug!(error = %e, "Storage read failed, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(handles) => handles,
        Err(e) => {
            debug!(error = %e, "Stored handles unparsable, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let store = MemoryStore::with_handles(["a", "b", "c"]);
        assert_eq!(read_recent(&store, 5), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_limit_keeps_latest_entries() {
        let store = MemoryStore::with_handles(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(read_recent(&store, 3), vec!["g", "f", "e"]);
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let store = MemoryStore::with_handles(["a", "b", "a"]);
        assert_eq!(read_recent(&store, 5), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_missing_key_reads_empty() {
        assert!(read_recent(&MemoryStore::new(), 5).is_empty());
    }

    #[test]
    fn test_unparsable_values_read_empty() {
        for raw in ["not-json", "{\"a\":1}", "[1,2,3]", "\"shoe\"", ""] {
            let store = MemoryStore::with_raw(raw);
            assert!(read_recent(&store, 5).is_empty(), "input {raw:?}");
        }
    }

    #[test]
    fn test_record_view_moves_existing_handle_to_end() {
        let store = MemoryStore::with_handles(["a", "b", "c"]);
        let handles = record_view(&store, "a", 10).unwrap();
        assert_eq!(handles, vec!["b", "c", "a"]);
        assert_eq!(read_recent(&store, 5), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_record_view_trims_to_cap() {
        let store = MemoryStore::with_handles(["a", "b", "c"]);
        let handles = record_view(&store, "d", 3).unwrap();
        assert_eq!(handles, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_record_view_replaces_garbage() {
        let store = MemoryStore::with_raw("not-json");
        let handles = record_view(&store, "a", 10).unwrap();
        assert_eq!(handles, vec!["a"]);
        assert_eq!(
            store.get_item(STORAGE_KEY).unwrap().as_deref(),
            Some("[\"a\"]")
        );
    }
}
