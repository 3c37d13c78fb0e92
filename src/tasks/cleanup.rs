//! TTL Cleanup Task
//!
//! Background task that periodically drops expired sessions and posts.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::AppState;

/// Spawns a task that sweeps both tables every `interval`.
///
/// Reads already hide expired entries; the sweep only reclaims their memory
/// and frees capacity. Abort the returned handle on shutdown.
pub fn spawn_cleanup_task(state: AppState, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs_f64(), "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let (sessions, posts) = sweep(&state).await;

            if sessions + posts > 0 {
                info!(sessions, posts, "TTL cleanup removed expired entries");
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

/// One sweep over both tables, returning `(sessions, posts)` removed.
pub async fn sweep(state: &AppState) -> (usize, usize) {
    let sessions = state.sessions.write().await.cleanup_expired();
    let posts = state.posts.write().await.cleanup_expired();
    (sessions, posts)
}
