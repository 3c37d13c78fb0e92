//! Request DTOs
//!
//! Structure of incoming JSON bodies.

use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::posts::MAX_POST_BYTES;

/// Body of `POST /signup` and `POST /login`.
///
/// The password is required on the wire but never checked or stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /addPost`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddPostRequest {
    pub text: String,
}

impl AddPostRequest {
    /// Rejects text whose UTF-8 encoding is over [`MAX_POST_BYTES`].
    pub fn validate(&self) -> Result<()> {
        let size = self.text.len();
        if size > MAX_POST_BYTES {
            return Err(ApiError::PayloadTooLarge { size });
        }
        Ok(())
    }
}
