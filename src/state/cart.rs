use serde::{Deserialize, Serialize};

/// Number of items in the cart
///
/// Serializes as a bare JSON integer, so the stored form of a count of 4 is `4`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    count: u64,
}

impl CartState {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Increment by `quantity`, saturating at `u64::MAX`
    pub fn add(&mut self, quantity: u64) -> u64 {
        self.count = self.count.saturating_add(quantity);
        self.count
    }
}
