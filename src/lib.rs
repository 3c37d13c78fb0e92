//! Mini Posts - a small post board over expiring in-memory tables
//!
//! Accounts sign up or log in for a bearer token, then add, list and delete
//! short text posts. Sessions and posts live in separate TTL/LRU caches and
//! vanish on restart.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod posts;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::ApiError;
pub use tasks::spawn_cleanup_task;
