//! Session state owned by the presentation layer

use tracing::info;

use super::cart::CartState;
use super::history::SearchHistory;
use crate::storage::{CART_COUNT_KEY, KeyValueStore, Persistence, SEARCH_HISTORY_KEY};

/// Cart counter and search history, flushed to storage after every mutation
///
/// Storage failures never reach the caller. When a write fails the in-memory value
/// stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct Session<S> {
    cart: CartState,
    history: SearchHistory,
    persistence: Persistence<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore state from `store`, defaulting to an empty cart and history when keys
    /// are missing or unreadable
    pub fn load(store: S) -> Self {
        let persistence = Persistence::new(store);
        let cart = persistence.load::<CartState>(CART_COUNT_KEY).unwrap_or_default();
        let history = persistence.load::<SearchHistory>(SEARCH_HISTORY_KEY).unwrap_or_default();

        info!(cart_count = cart.count(), history_len = history.len(), "session loaded");

        Self { cart, history, persistence }
    }

    /// Add `quantity` items and persist the new count. Returns the new count.
    pub fn add_to_cart(&mut self, quantity: u64) -> u64 {
        let count = self.cart.add(quantity);
        self.persistence.save(CART_COUNT_KEY, &self.cart);
        count
    }

    /// Add a single item
    pub fn add_one(&mut self) -> u64 {
        self.add_to_cart(1)
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    /// Record a search the caller has already validated as non-blank. Persists only
    /// when the history changed; returns whether it did.
    pub fn record_query(&mut self, query: &str) -> bool {
        let inserted = self.history.record(query);
        if inserted {
            self.persistence.save(SEARCH_HISTORY_KEY, &self.history);
        }
        inserted
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }
}
