//! LRU Tracker Module
//!
//! Recency ordering of keys, used to pick the eviction victim once a store
//! is full.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Keys ordered by last write or read.
///
/// The back of the queue is the most recently used key, the front the
/// least recently used one. Stores hold at most a few hundred keys, so the
/// linear scans in `touch`/`remove` stay cheap.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks `key` as the most recently used, inserting it if unknown.
    pub fn touch(&mut self, key: &str) {
        match self.position(key) {
            Some(idx) => {
                if let Some(existing) = self.order.remove(idx) {
                    self.order.push_back(existing);
                }
            }
            None => self.order.push_back(key.to_owned()),
        }
    }

    // == Remove ==
    /// Forgets `key`. Returns whether it was tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(idx) => self.order.remove(idx).is_some(),
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Pops the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }
}

#[cfg(test)]
impl LruTracker {
    /// The key `evict_oldest` would return next.
    fn peek_oldest(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }
}
