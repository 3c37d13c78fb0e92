//! Cache Module
//!
//! In-memory key-value storage with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
