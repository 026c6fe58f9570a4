//! Storage layer for todo
//!
//! Persists the task store as a single pretty-printed JSON file,
//! conventionally `data/todos.json`:
//!
//! ```text
//! {
//!   "tasks": [
//!     { "id": 1, "description": "buy milk", "completed": false }
//!   ]
//! }
//! ```
//!
//! Absence of the file is the first-run case and loads as an empty store.
//! Writes go through a temp file in the same directory followed by a rename,
//! so a failed save never leaves a valid-looking partial file behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::task::TaskStore;

/// Storage manager for the persisted task store
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the data file
    data_file: PathBuf,
}

impl Storage {
    /// Create a storage manager backed by the given data file
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Path to the data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the task store from the data file.
    ///
    /// A missing file is not an error: it loads as an empty store. A file
    /// that exists but cannot be parsed fails with `MalformedData`; read
    /// failures fail with `Io`. Identifiers found in the file are trusted
    /// as-is.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "data file absent, starting empty");
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.data_file)?;
        let store: TaskStore =
            serde_json::from_str(&content).map_err(|source| Error::MalformedData {
                path: self.data_file.clone(),
                source,
            })?;

        debug!(
            path = %self.data_file.display(),
            tasks = store.len(),
            "loaded task store"
        );
        Ok(store)
    }

    /// Save the task store to the data file, creating parent directories as
    /// needed. The whole store is written each time.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        self.write_atomic(json.as_bytes())?;
        debug!(
            path = %self.data_file.display(),
            tasks = store.len(),
            "saved task store"
        );
        Ok(())
    }

    /// Write data atomically using temp file + rename.
    ///
    /// Readers of the data file never see partial writes: the file is either
    /// fully written or untouched.
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Create temp file in same directory (for atomic rename)
        let temp_path = self.data_file.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        // Atomic rename
        fs::rename(&temp_path, &self.data_file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(temp: &TempDir) -> Storage {
        Storage::new(temp.path().join("data").join("todos.json"))
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        let store = storage.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        let mut store = TaskStore::new();
        store.add("buy milk");
        storage.save(&store).unwrap();

        assert!(storage.data_file().exists());
    }

    #[test]
    fn save_then_load_round_trips_exactly() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        let mut store = TaskStore::new();
        store.add("buy milk");
        store.add("call mom");
        store.add("pay bills");
        store.complete(2).unwrap();
        store.delete(1).unwrap();

        storage.save(&store).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, store);
        let ids: Vec<u64> = loaded.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(loaded.get(2).unwrap().completed);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        let mut store = TaskStore::new();
        store.add("first");
        storage.save(&store).unwrap();

        store.delete(1).unwrap();
        store.add("second");
        storage.save(&store).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.list()[0].description, "second");
    }

    #[test]
    fn load_malformed_file_reports_malformed_data() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(storage.data_file(), "{ not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, Error::MalformedData { .. }));
    }

    #[test]
    fn load_wrong_shape_reports_malformed_data() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(storage.data_file(), r#"{"tasks": [{"id": "one"}]}"#).unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, Error::MalformedData { .. }));
    }

    #[test]
    fn persisted_format_uses_named_fields() {
        let temp = TempDir::new().unwrap();
        let storage = storage_in(&temp);

        let mut store = TaskStore::new();
        store.add("buy milk");
        storage.save(&store).unwrap();

        let content = fs::read_to_string(storage.data_file()).unwrap();
        assert!(content.contains("\"tasks\""));
        assert!(content.contains("\"id\""));
        assert!(content.contains("\"description\""));
        assert!(content.contains("\"completed\""));
    }
}
