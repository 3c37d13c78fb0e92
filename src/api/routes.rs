//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_post_handler, delete_post_handler, get_posts_handler, health_handler, login_handler,
    signup_handler, AppState,
};
use crate::posts::MAX_POST_BYTES;

/// Request body cap. Well above the post limit so that JSON escaping of a
/// maximal post still reaches the handler, which owns the size check.
pub const MAX_BODY_BYTES: usize = MAX_POST_BYTES * 8;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /signup` - Issue a session token
/// - `POST /login` - Issue a fresh session token
/// - `POST /addPost` - Store a post (bearer)
/// - `GET /getPosts` - List live posts (bearer)
/// - `DELETE /deletePost/:post_id` - Delete a post (bearer)
/// - `GET /health` - Health check with table statistics
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/addPost", post(add_post_handler))
        .route("/getPosts", get(get_posts_handler))
        .route("/deletePost/:post_id", delete(delete_post_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
