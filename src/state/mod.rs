//! Session state: the cart counter and the search history.
//!
//! - [`CartState`] - non-negative item count
//! - [`SearchHistory`] - up to 10 distinct queries, most recent first
//! - [`Session`] - owns both plus the persistence adapter and writes through on every change

pub mod cart;
pub mod history;
pub mod session;

pub use cart::CartState;
pub use history::{MAX_HISTORY_ENTRIES, SearchHistory};
pub use session::Session;
