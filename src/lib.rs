//! Storefront Session - cart and search state for a terminal storefront
//!
//! This library holds the client-side state of a storefront demo and the terminal
//! front end that drives it:
//!
//! - A cart counter and a bounded, duplicate-free search history
//! - Best-effort persistence to a key/value store that never surfaces errors
//! - Search suggestions and a cancellable simulated search
//! - Toast notifications with four severities
//! - An interactive ratatui storefront plus one-shot CLI commands
//!
//! # Example
//!
//! ```
//! use storefront_session::state::Session;
//! use storefront_session::storage::MemoryStore;
//!
//! let mut session = Session::load(MemoryStore::new());
//! session.add_to_cart(1);
//! session.add_to_cart(3);
//! session.record_query("AirPods");
//!
//! let reloaded = Session::load(session.into_store());
//! assert_eq!(reloaded.count(), 4);
//! assert_eq!(reloaded.history().entries(), ["AirPods"]);
//! ```

pub mod catalog;
pub mod cli;
pub mod notifications;
pub mod search;
pub mod state;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use notifications::{Notification, Severity, ToastQueue};
pub use state::{CartState, SearchHistory, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Persistence};
