//! Cache Statistics Module
//!
//! Counters describing how entries leave a store.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of a store's size and removal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently live
    pub live_entries: usize,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Entries dropped because their TTL elapsed
    pub expirations: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn set_live_entries(&mut self, count: usize) {
        self.live_entries = count;
    }
}
