//! Request and Response models for the HTTP API

pub mod requests;
pub mod responses;

pub use requests::{AddPostRequest, CredentialsRequest};
pub use responses::{GetPostsResponse, HealthResponse, PostResponse, TokenResponse};
