//! File-backed store: one JSON file per key with atomic writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageResult};
use crate::utils::paths::key_file_name;

/// Stores each key as `<percent-encoded key>.json` inside a data directory
///
/// The directory is created on the first write, so opening a store never fails.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(key_file_name(key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;

        // Write atomically (temp file + rename)
        let item_path = self.item_path(key);
        let temp_path = self.dir.join(format!("{}.tmp", key_file_name(key)));
        fs::write(&temp_path, value)?;
        if let Err(e) = fs::rename(&temp_path, &item_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}
