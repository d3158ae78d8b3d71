//! File-based Local Storage Adapter
//!
//! Keeps every key in one JSON object file. Each write goes to a sibling
//! `.tmp` file that is then renamed over the original, so readers see either
//! the old map or the new one.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{LocalStorage, StorageError};

/// File name used inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

type StorageMap = BTreeMap<String, String>;

/// Local storage backed by a single JSON file.
#[derive(Debug)]
pub struct FileLocalStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLocalStorage {
    /// Storage at an explicit file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Storage at `<data_dir>/storage.json`.
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir.as_ref().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole map. A missing file is an empty map; so is a file
    /// that does not parse, which is logged and later overwritten.
    fn load(&self) -> Result<StorageMap, StorageError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StorageMap::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        match serde_json::from_str::<StorageMap>(&data) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to parse storage file: {e}");
                Ok(StorageMap::new())
            }
        }
    }

    fn save(&self, map: &StorageMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&temp_path)
            .map_err(|e| StorageError::Io(format!("Failed to create temporary file: {e}")))?;

        // A leftover temp file from another umask keeps its old mode.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(|e| StorageError::Io(format!("Failed to restrict permissions: {e}")))?;
        }

        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {e}")))?;
        drop(file);

        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| StorageError::Io(format!("Failed to rename storage file: {e}")))
    }

    fn update(&self, apply: impl FnOnce(&mut StorageMap)) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        let mut map = self.load()?;
        apply(&mut map);
        self.save(&map)
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|map| {
            map.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        assert_eq!(storage.get_item("token").unwrap(), None);
    }

    #[test]
    fn set_get_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path().join("nested"));

        storage.set_item("token", "t1").unwrap();
        storage.set_item("user", r#"{"name":"A"}"#).unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("t1"));

        storage.remove_item("token").unwrap();
        assert_eq!(storage.get_item("token").unwrap(), None);
        assert_eq!(
            storage.get_item("user").unwrap().as_deref(),
            Some(r#"{"name":"A"}"#)
        );
    }

    #[test]
    fn values_survive_a_new_instance() {
        let dir = TempDir::new().unwrap();
        FileLocalStorage::in_dir(dir.path()).set_item("token", "t1").unwrap();

        let reopened = FileLocalStorage::in_dir(dir.path());
        assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("t1"));
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "{not json").unwrap();

        assert_eq!(storage.get_item("token").unwrap(), None);
        storage.set_item("token", "t2").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("t2"));
    }

    #[test]
    fn removing_from_missing_file_does_not_create_it() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        storage.remove_item("token").unwrap();
        assert!(!storage.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        storage.set_item("token", "t1").unwrap();

        let mode = std::fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn write_replaces_file_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        storage.set_item("token", "t1").unwrap();
        storage.set_item("user", "{}").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![STORAGE_FILE_NAME.to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn open_permissions_are_tightened_on_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "{}").unwrap();
        std::fs::set_permissions(storage.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
        let stale = storage.path().with_extension("tmp");
        std::fs::write(&stale, "old").unwrap();
        std::fs::set_permissions(&stale, std::fs::Permissions::from_mode(0o666)).unwrap();

        storage.set_item("token", "t1").unwrap();

        let mode = std::fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert!(!stale.exists());
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("t1"));
    }
}
