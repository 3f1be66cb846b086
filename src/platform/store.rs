// ModusKit - platform/store.rs
//
// Key-value preference storage.
//
// `PreferenceStore` is the seam the theme store persists through. Two
// backends ship with the application:
// - `FileStore`: a JSON object of string keys to string values kept in the
//   platform data directory. Writes are atomic (write temp, rename) so a
//   crash mid-save never corrupts the previous good file.
// - `MemoryStore`: process-local map, used when no data directory is
//   usable and in tests.
//
// Every operation is fallible. Callers decide whether a failure matters;
// the theme store only ever logs it.

use crate::util::constants::MAX_PREFERENCES_FILE_BYTES;
use crate::util::error::StoreError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A string key-value store with fallible access.
pub trait PreferenceStore {
    /// Read the value stored under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, handy for seeding a previous session.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File backend
// =============================================================================

/// JSON-file backed store.
///
/// The whole map is held in memory; every mutation rewrites the file. The
/// in-memory map is only updated once the write has succeeded, so a failed
/// write leaves `get` reporting what is actually on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is a normal first run and yields an empty store.
    /// Unreadable, oversized, or malformed files are reported as errors;
    /// the caller typically logs them and falls back to `FileStore::empty`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = read_entries(path)?;
        tracing::debug!(
            path = %path.display(),
            keys = entries.len(),
            "Preference store opened"
        );
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// An empty store that will (re)create `path` on the first write.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }

        let json =
            serde_json::to_string_pretty(entries).map_err(|source| StoreError::Serialize { source })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            operation: "write",
            source,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                operation: "rename",
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Preferences saved");
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }
}

/// Read the key-value map from disk. Missing file → empty map.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                operation: "stat",
                source,
            })
        }
    };

    if metadata.len() > MAX_PREFERENCES_FILE_BYTES {
        return Err(StoreError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_PREFERENCES_FILE_BYTES,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(&dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("modus-theme", r#"{"family":"connect","mode":"dark"}"#).unwrap();
        store.set("other", "1").unwrap();
        store.remove("other").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("modus-theme").unwrap().as_deref(),
            Some(r#"{"family":"connect","mode":"dark"}"#)
        );
        assert_eq!(reopened.get("other").unwrap(), None);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();

        let result = FileStore::open(&path);
        assert!(
            matches!(result, Err(StoreError::Deserialize { .. })),
            "expected Deserialize, got {result:?}"
        );
    }

    #[test]
    fn test_file_store_oversized_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let padding = "x".repeat(MAX_PREFERENCES_FILE_BYTES as usize + 1);
        std::fs::write(&path, padding).unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        // Parent "directory" is a regular file, so every write fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = FileStore::empty(&blocker.join("preferences.json"));

        let result = store.set("k", "v");
        assert!(matches!(result, Err(StoreError::Io { .. })), "{result:?}");
        assert_eq!(store.get("k").unwrap(), None);
    }
}
