//! Background Tasks Module
//!
//! # Tasks
//! - TTL Cleanup: drops expired sessions and posts at a fixed interval

mod cleanup;

pub use cleanup::{spawn_cleanup_task, sweep};
