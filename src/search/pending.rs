//! Simulated search latency as an explicit, cancellable task
//!
//! A [`PendingSearch`] completes once its deadline passes unless its
//! [`CancellationToken`] fired first. The event loop polls it; nothing runs in the
//! background.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Delay before a search reports its results in the interactive UI
pub const SEARCH_LATENCY: Duration = Duration::from_millis(1500);

/// Shared flag that cancels a pending search
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Result of polling a pending search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPoll {
    Pending,
    Completed(String),
    Cancelled,
}

#[derive(Debug)]
pub struct PendingSearch {
    query: String,
    deadline: Instant,
    token: CancellationToken,
}

impl PendingSearch {
    pub fn start(query: impl Into<String>, started_at: Instant, latency: Duration) -> Self {
        Self { query: query.into(), deadline: started_at + latency, token: CancellationToken::new() }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// A handle that can cancel this search from elsewhere
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn poll(&self, now: Instant) -> SearchPoll {
        if self.token.is_cancelled() {
            SearchPoll::Cancelled
        } else if now >= self.deadline {
            SearchPoll::Completed(self.query.clone())
        } else {
            SearchPoll::Pending
        }
    }
}
