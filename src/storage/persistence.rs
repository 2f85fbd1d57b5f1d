//! JSON persistence over a [`KeyValueStore`] that never surfaces errors

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{KeyValueStore, StorageError, StorageResult};

/// Best-effort persistence adapter
///
/// `save` logs and swallows failures; `load` maps a missing key, unreadable storage
/// and malformed content all to `None`.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Serialize `value` and write it under `key`. Returns whether the write succeeded,
    /// but callers are free to ignore it.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                debug!(key, "persisted value");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "could not save to storage; keeping session-only state");
                false
            }
        }
    }

    /// Read and deserialize the value under `key`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "could not load from storage; using default");
                None
            }
        }
    }

    fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialize { key: key.to_string(), source })?;
        self.store.set_item(key, &json)
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw)
            .map_err(|source| StorageError::Corrupt { key: key.to_string(), source })?;
        Ok(Some(value))
    }
}
