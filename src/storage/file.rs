//! File-backed [`IdentifierStore`]: a JSON object of string keys to string
//! values, read fresh on every access.

use super::IdentifierStore;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Storage file missing, starting empty");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl IdentifierStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&items)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{read_recent, record_view, STORAGE_KEY};

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get_item(STORAGE_KEY).unwrap(), None);
        assert!(read_recent(&store, 5).is_empty());
    }

    #[test]
    fn test_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = JsonFileStore::new(&path);

        record_view(&store, "shoe-a", 20).unwrap();
        record_view(&store, "shoe-b", 20).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(read_recent(&reopened, 5), vec!["shoe-b", "shoe-a"]);
    }

    #[test]
    fn test_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"cart":"[]"}"#).unwrap();

        let store = JsonFileStore::new(&path);
        store.set_item(STORAGE_KEY, "[\"a\"]").unwrap();

        assert_eq!(store.get_item("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_malformed_file_is_an_error_but_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get_item(STORAGE_KEY), Err(StorageError::Format(_))));
        assert!(read_recent(&store, 5).is_empty());
    }
}
