//! Application State
//!
//! Shared state for the stub API handlers, wrapped in `Arc` by the router.

use std::time::Instant;

use super::store::StubStore;

/// Shared state for all handlers
pub struct AppState {
    /// Fixture-backed complaint and SOS tables
    pub store: StubStore,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: StubStore) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
