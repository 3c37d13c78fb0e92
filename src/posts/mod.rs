//! Posts Module
//!
//! Short text posts visible to every authenticated caller.

mod store;

pub use store::PostStore;

/// Largest accepted post, in UTF-8 bytes (1 MiB).
pub const MAX_POST_BYTES: usize = 1024 * 1024;
