//! Error types for the post service
//!
//! Every failure is request-scoped and maps straight onto an HTTP status
//! with a JSON `{"detail": ...}` body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing, malformed, unknown or expired bearer token
    #[error("{0}")]
    Unauthorized(String),

    /// Post text longer than the allowed byte size
    #[error("Payload size exceeds 1MB")]
    PayloadTooLarge { size: usize },

    /// Post absent, expired, or its text equals the caller's token
    #[error("Post not found")]
    PostNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge { .. } => StatusCode::BAD_REQUEST,
            ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.to_string() }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, ApiError>;
