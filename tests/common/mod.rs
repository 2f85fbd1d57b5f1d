//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use storefront_session::storage::FileStore;
use storefront_session::utils::key_file_name;
use tempfile::TempDir;

/// Builder for data directories with pre-seeded storage items
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a raw stored value, bypassing the persistence adapter
    pub fn with_item(self, key: &str, raw: &str) -> Self {
        fs::write(self.temp_dir.path().join(key_file_name(key)), raw)
            .expect("Failed to write stored item");
        self
    }

    pub fn with_cart_count(self, raw: &str) -> Self {
        self.with_item("cartCount", raw)
    }

    pub fn with_search_history(self, queries: &[&str]) -> Self {
        let raw = serde_json::to_string(queries).expect("Failed to encode history");
        self.with_item("searchHistory", &raw)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.temp_dir.path())
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw contents of a stored item, if present
pub fn read_item(dir: &Path, key: &str) -> Option<String> {
    fs::read_to_string(dir.join(key_file_name(key))).ok()
}

/// A path under a temp dir that is a regular file, so it can never be a data directory
pub fn blocked_data_dir(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("not-a-directory");
    fs::write(&path, "occupied").expect("Failed to create blocker file");
    path
}
