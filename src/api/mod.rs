//! API Module
//!
//! HTTP handlers, bearer extraction and routing.
//!
//! # Endpoints
//! - `POST /signup`, `POST /login` - Issue a bearer token
//! - `POST /addPost` - Store a post
//! - `GET /getPosts` - List live posts
//! - `DELETE /deletePost/:post_id` - Delete a post
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
