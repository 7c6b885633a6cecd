use crate::application::Storage;
use crate::domain::StoreResult;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Key-value storage backed by one file per key under a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backend rooted at the platform data directory, falling back to
    /// the current directory when no home can be determined.
    pub fn default_location() -> Self {
        Self::new(default_data_dir())
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "apptrack") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// In-memory backend for tests, doctests, and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationStore, STORAGE_KEY};
    use crate::domain::status;

    #[test]
    fn test_file_read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.read(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("someKey", "[1, 2, 3]").unwrap();
        assert_eq!(storage.read("someKey").unwrap().unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_file_write_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut storage = FileStorage::new(&nested);
        storage.write("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_store_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();

        let snapshot = {
            let mut store = ApplicationStore::open(FileStorage::new(dir.path())).unwrap();
            let patch = crate::domain::ApplicationPatch {
                status: Some(status::OFFER.to_string()),
                ..Default::default()
            };
            store.update("1", &patch).unwrap();
            store.applications().to_vec()
        };

        let reopened = ApplicationStore::open(FileStorage::new(dir.path())).unwrap();
        assert_eq!(reopened.applications(), snapshot.as_slice());
        assert_eq!(reopened.get("1").unwrap().status, status::OFFER);
    }

    #[test]
    fn test_memory_storage_round_trips() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").unwrap().unwrap(), "v");
    }
}
