//! Store configuration.

use std::time::Duration;

/// Capacities and timings for the store and its sync client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum length of the favorites list.
    pub favorites_capacity: usize,
    /// Maximum length of the recently-used list.
    pub recent_capacity: usize,
    /// Fixed timeout applied to every synchronization request.
    pub sync_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            favorites_capacity: 20,
            recent_capacity: 20,
            sync_timeout: Duration::from_secs(10),
        }
    }
}
