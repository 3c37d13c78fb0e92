//! Bearer authentication extractor
//!
//! Handlers that take an [`AuthSession`] argument only run for requests
//! carrying `Authorization: Bearer <token>` with a live token.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use crate::api::AppState;
use crate::auth::AuthSession;
use crate::error::{ApiError, Result};

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(&parts.headers)?;

        let sessions = state.sessions.read().await;
        sessions.authenticate(token).inspect_err(|_| {
            warn!(path = %parts.uri.path(), "request with invalid bearer token");
        })
    }
}

/// Pulls the credentials out of an `Authorization: Bearer` header.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    let invalid = || ApiError::Unauthorized("Invalid authentication credentials".to_string());

    let raw = value.to_str().map_err(|_| invalid())?;
    let (scheme, credentials) = raw.trim().split_once(' ').ok_or_else(invalid)?;
    let credentials = credentials.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || credentials.is_empty() {
        return Err(invalid());
    }
    Ok(credentials)
}
