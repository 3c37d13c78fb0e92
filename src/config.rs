//! Configuration Module
//!
//! Server configuration loaded from environment variables. Every value has
//! a default, and the defaults reproduce the fixed behaviour of the service:
//! port 8000, five-minute entries, 100 sessions and 100 posts.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of an issued bearer token, in seconds
    pub session_ttl: u64,
    /// Lifetime of a post, in seconds
    pub post_ttl: u64,
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
    /// Maximum number of stored posts
    pub max_posts: usize,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `SESSION_TTL` - Session lifetime in seconds (default: 300)
    /// - `POST_TTL` - Post lifetime in seconds (default: 300)
    /// - `MAX_SESSIONS` - Session table capacity (default: 100)
    /// - `MAX_POSTS` - Post table capacity (default: 100)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            session_ttl: parse_or(&lookup, "SESSION_TTL", defaults.session_ttl),
            post_ttl: parse_or(&lookup, "POST_TTL", defaults.post_ttl),
            max_sessions: parse_or(&lookup, "MAX_SESSIONS", defaults.max_sessions),
            max_posts: parse_or(&lookup, "MAX_POSTS", defaults.max_posts),
            cleanup_interval: parse_or(&lookup, "CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl)
    }

    pub fn post_ttl(&self) -> Duration {
        Duration::from_secs(self.post_ttl)
    }

    /// Sweep interval, never shorter than one second.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            session_ttl: 300,
            post_ttl: 300,
            max_sessions: 100,
            max_posts: 100,
            cleanup_interval: 1,
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
