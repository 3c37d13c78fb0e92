//! Session Layer
//!
//! Bearer sessions keyed by email. Issuing a session for an email replaces
//! its previous token; a token authenticates while it is the live value of
//! some session entry.

use std::time::Duration;

use subtle::ConstantTimeEq;
use tracing::{debug, info};

use crate::auth::{generate_token, is_well_formed};
use crate::cache::{CacheStats, CacheStore};
use crate::error::{ApiError, Result};

// == Auth Session ==
/// Identity recovered from a valid bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Account the token was issued to
    pub email: String,
    /// The presented token
    pub token: String,
}

// == Session Store ==
/// Session table: `email -> token`.
#[derive(Debug)]
pub struct SessionStore {
    sessions: CacheStore<String>,
}

impl SessionStore {
    pub fn new(max_sessions: usize, ttl: Duration) -> Self {
        Self {
            sessions: CacheStore::new(max_sessions, ttl),
        }
    }

    // == Issue ==
    /// Generates a token for `email`, replacing any token it held before.
    pub fn issue(&mut self, email: &str) -> String {
        let token = generate_token();
        let replaced = self.sessions.contains(email);
        self.sessions.set(email, token.clone());

        info!(replaced, "issued session token");
        token
    }

    // == Authenticate ==
    /// Resolves `presented` to the session holding it.
    pub fn authenticate(&self, presented: &str) -> Result<AuthSession> {
        if !is_well_formed(presented) {
            debug!("rejected malformed token");
            return Err(invalid_token());
        }

        // Scan every live session so the cost does not depend on where
        // (or whether) the token matches.
        let mut owner = None;
        for (email, token) in self.sessions.live() {
            if constant_time_eq(token, presented) && owner.is_none() {
                owner = Some(email.clone());
            }
        }

        match owner {
            Some(email) => Ok(AuthSession {
                email,
                token: presented.to_owned(),
            }),
            None => {
                debug!("rejected unknown or expired token");
                Err(invalid_token())
            }
        }
    }

    pub fn cleanup_expired(&mut self) -> usize {
        self.sessions.cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.sessions.stats()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn invalid_token() -> ApiError {
    ApiError::Unauthorized("Invalid token".to_string())
}

/// Compares two strings without short-circuiting on the first differing byte.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        // Keep timing close to the equal-length path.
        let _ = a.ct_eq(a);
        return false;
    }
    a.ct_eq(b).into()
}
