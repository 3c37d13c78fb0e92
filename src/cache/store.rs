//! Cache Store Module
//!
//! Bounded string-keyed map with per-entry TTL and LRU eviction. Sessions
//! and posts each get their own instance.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Cache Store ==
/// TTL + LRU bounded map.
///
/// Entries live for a fixed `ttl` counted from their last write; reads do
/// not extend it. Reads through [`get`](Self::get) do refresh recency, so a
/// frequently read key is the last to be evicted. Expired entries are
/// invisible to every read and are removed lazily or by
/// [`cleanup_expired`](Self::cleanup_expired).
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` entries, each
    /// live for `ttl` after insertion.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, resetting its age to zero.
    ///
    /// Admitting a new key into a full store first drops expired entries,
    /// then the least recently used one if that was not enough.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if self.max_entries == 0 {
            debug!(%key, "store has zero capacity, dropping write");
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.cleanup_expired();

            while self.entries.len() >= self.max_entries {
                let Some(victim) = self.lru.evict_oldest() else {
                    break;
                };
                if self.entries.remove(&victim).is_some() {
                    self.stats.record_eviction();
                    debug!(key = %victim, "evicted least recently used entry");
                }
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, self.ttl));
        self.lru.touch(&key);
    }

    // == Get ==
    /// Returns the live value for `key` and marks it most recently used.
    ///
    /// An expired entry found here is removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = self.entries.get(key)?.is_expired();

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            return None;
        }

        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Live value for `key` without refreshing its recency.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| &entry.value)
    }

    // == Contains ==
    /// Whether `key` holds a live entry. Does not refresh recency.
    pub fn contains(&self, key: &str) -> bool {
        self.peek(key).is_some()
    }

    // == Delete ==
    /// Removes `key`, returning its value if it was live.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let entry = self.remove_entry(key)?;

        if entry.is_expired() {
            self.stats.record_expirations(1);
            None
        } else {
            Some(entry.value)
        }
    }

    // == Items ==
    /// Snapshot of every live `(key, value)` pair, in no particular order.
    pub fn items(&self) -> Vec<(String, V)> {
        self.live().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Borrowing iterator over live entries.
    pub fn live(&self) -> impl Iterator<Item = (&String, &V)> + '_ {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(move |(_, entry)| !entry.is_expired_at(now))
            .map(|(key, entry)| (key, &entry.value))
    }

    // == Cleanup Expired ==
    /// Removes every expired entry, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    // == Stats ==
    /// Counters plus the number of entries still live right now.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.set_live_entries(self.live().count());
        stats
    }

    /// Number of stored entries, counting expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        Some(entry)
    }
}
