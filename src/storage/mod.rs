//! Best-effort key/value persistence for session state
//!
//! Values are stored as JSON text under fixed string keys, the same shape browser
//! local storage uses:
//! - `cartCount`: JSON integer
//! - `searchHistory`: JSON array of strings
//!
//! Backends implement [`KeyValueStore`]. [`Persistence`] wraps a backend and swallows
//! every failure so callers never see a storage error.

pub mod error;
pub mod file;
pub mod memory;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;

/// Storage key for the cart counter
pub const CART_COUNT_KEY: &str = "cartCount";
/// Storage key for the search history list
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// String-to-string storage backend
pub trait KeyValueStore {
    /// Read the raw value under `key`, `Ok(None)` when the key was never written
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write the raw value under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
