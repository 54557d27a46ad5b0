//! Key-value preference persistence.

use super::{PreferenceError, PreferenceResult};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Persisted string preferences keyed by name.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> PreferenceResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> PreferenceResult<()> {
        (**self).write(key, value)
    }
}

/// Session-scoped store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.insert(key, value);
        Ok(())
    }
}

/// JSON object file of string preferences, e.g. `{"theme": "dark"}`.
///
/// A missing file reads as empty. Writes replace the file through a sibling
/// temp file so readers never observe a partial document.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> PreferenceResult<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(error) => return Err(self.io_error(error)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|error| self.parse_error(error))
    }

    fn io_error(&self, error: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            error,
        }
    }

    fn parse_error(&self, error: serde_json::Error) -> PreferenceError {
        PreferenceError::Parse {
            path: self.path.clone(),
            error,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    /// A malformed existing file is replaced rather than blocking the write.
    fn write(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PreferenceError::Parse { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }
        let body = serde_json::to_string_pretty(&values).map_err(|err| self.parse_error(err))?;
        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, body).map_err(|error| self.io_error(error))?;
        std::fs::rename(&staging, &self.path).map_err(|error| self.io_error(error))
    }
}

#[cfg(test)]
mod tests {
    use super::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
    use crate::theme::PreferenceError;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.read("theme").unwrap(), None);
        store.write("theme", "dark").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_reads_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.read("theme").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"locale": "es-ES"}"#).unwrap();

        let store = FilePreferenceStore::new(&path);
        store.write("theme", "dark").unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.read("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.read("locale").unwrap().as_deref(), Some("es-ES"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn file_store_reports_malformed_file_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FilePreferenceStore::new(&path);

        let err = store.read("theme").unwrap_err();
        assert!(matches!(err, PreferenceError::Parse { .. }));

        store.write("theme", "light").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("light"));
    }
}
