//! Post Store
//!
//! Post table: `post_id -> text`. Posts are not tied to an account. Listing
//! and deletion skip any post whose text equals the caller's token.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::auth::generate_token;
use crate::cache::{CacheStats, CacheStore};
use crate::error::{ApiError, Result};

// == Post Store ==
#[derive(Debug)]
pub struct PostStore {
    posts: CacheStore<String>,
}

impl PostStore {
    pub fn new(max_posts: usize, ttl: Duration) -> Self {
        Self {
            posts: CacheStore::new(max_posts, ttl),
        }
    }

    // == Add ==
    /// Stores `text` under a freshly generated ID.
    ///
    /// Size limits are enforced by the caller.
    pub fn add(&mut self, text: String) -> String {
        let post_id = generate_token();
        let bytes = text.len();
        self.posts.set(post_id.clone(), text);

        info!(%post_id, bytes, "post added");
        post_id
    }

    // == List ==
    /// Every live post as `post_id -> text`, leaving out posts whose text
    /// is exactly `token`.
    pub fn list_all_except(&self, token: &str) -> HashMap<String, String> {
        self.posts
            .items()
            .into_iter()
            .filter(|(_, text)| text != token)
            .collect()
    }

    // == Delete ==
    /// Deletes `post_id` if it is live and its text differs from `token`.
    pub fn delete_unless_text_is(&mut self, post_id: &str, token: &str) -> Result<String> {
        let deletable = self.posts.get(post_id).is_some_and(|text| text != token);

        if !deletable {
            debug!(post_id, "delete refused: missing, expired or text matches token");
            return Err(ApiError::PostNotFound(post_id.to_owned()));
        }

        let text = self
            .posts
            .delete(post_id)
            .ok_or_else(|| ApiError::PostNotFound(post_id.to_owned()))?;

        info!(post_id, "post deleted");
        Ok(text)
    }

    pub fn cleanup_expired(&mut self) -> usize {
        self.posts.cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.posts.stats()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
