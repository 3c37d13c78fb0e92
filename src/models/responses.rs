//! Response DTOs
//!
//! Structure of outgoing JSON bodies.

use std::collections::HashMap;

use serde::Serialize;

use crate::cache::CacheStats;

/// Response of `POST /signup` and `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

/// Response of `POST /addPost`.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    #[serde(rename = "postID")]
    pub post_id: String,
}

impl PostResponse {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
        }
    }
}

/// Response of `GET /getPosts`: `post_id -> text`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPostsResponse {
    pub posts: HashMap<String, String>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub sessions: CacheStats,
    pub posts: CacheStats,
}

impl HealthResponse {
    pub fn healthy(sessions: CacheStats, posts: CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            sessions,
            posts,
        }
    }
}
