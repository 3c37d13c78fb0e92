//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::auth::{AuthSession, SessionStore};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    AddPostRequest, CredentialsRequest, GetPostsResponse, HealthResponse, PostResponse,
    TokenResponse,
};
use crate::posts::PostStore;

/// Application state shared across all handlers.
///
/// Each table sits behind its own lock; no handler holds both at once.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<SessionStore>>,
    pub posts: Arc<RwLock<PostStore>>,
}

impl AppState {
    pub fn new(sessions: SessionStore, posts: PostStore) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(sessions)),
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// Creates both tables with the capacities and TTLs from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SessionStore::new(config.max_sessions, config.session_ttl()),
            PostStore::new(config.max_posts, config.post_ttl()),
        )
    }
}

/// Handler for POST /signup
///
/// Issues a session token for the email. Accounts are not persisted and the
/// password is not checked.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Json<TokenResponse> {
    Json(issue_session(&state, &req).await)
}

/// Handler for POST /login
///
/// Same contract as signup: any credentials succeed, and the email's
/// previous token stops working.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Json<TokenResponse> {
    Json(issue_session(&state, &req).await)
}

async fn issue_session(state: &AppState, req: &CredentialsRequest) -> TokenResponse {
    let token = state.sessions.write().await.issue(&req.email);
    TokenResponse::bearer(token)
}

/// Handler for POST /addPost
pub async fn add_post_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Json(req): Json<AddPostRequest>,
) -> Result<Json<PostResponse>> {
    req.validate()?;

    let post_id = state.posts.write().await.add(req.text);
    debug!(email = %session.email, %post_id, "post created");
    Ok(Json(PostResponse::new(post_id)))
}

/// Handler for GET /getPosts
///
/// Lists every live post except those whose text is the caller's token.
pub async fn get_posts_handler(
    State(state): State<AppState>,
    session: AuthSession,
) -> Json<GetPostsResponse> {
    let posts = state.posts.read().await.list_all_except(&session.token);
    Json(GetPostsResponse { posts })
}

/// Handler for DELETE /deletePost/:post_id
///
/// Any valid token may delete any post, unless the post's text is that
/// token.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    session: AuthSession,
    Path(post_id): Path<String>,
) -> Result<StatusCode> {
    state
        .posts
        .write()
        .await
        .delete_unless_text_is(&post_id, &session.token)?;
    Ok(StatusCode::OK)
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await.stats();
    let posts = state.posts.read().await.stats();
    Json(HealthResponse::healthy(sessions, posts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::posts::MAX_POST_BYTES;

    fn state() -> AppState {
        AppState::from_config(&Config::default())
    }

    fn credentials(email: &str) -> Json<CredentialsRequest> {
        Json(CredentialsRequest {
            email: email.to_string(),
            password: "p".to_string(),
        })
    }

    async fn session_for(state: &AppState, email: &str) -> AuthSession {
        let token = signup_handler(State(state.clone()), credentials(email))
            .await
            .0
            .access_token;
        state.sessions.read().await.authenticate(&token).unwrap()
    }

    #[tokio::test]
    async fn test_signup_and_login_issue_bearer_tokens() {
        let state = state();

        let signup = signup_handler(State(state.clone()), credentials("a@x.com")).await;
        let login = login_handler(State(state.clone()), credentials("a@x.com")).await;

        assert_eq!(signup.token_type, "bearer");
        assert_eq!(login.token_type, "bearer");
        let sessions = state.sessions.read().await;
        assert!(sessions.authenticate(&signup.access_token).is_err());
        assert!(sessions.authenticate(&login.access_token).is_ok());
    }

    #[tokio::test]
    async fn test_add_get_delete_flow() {
        let state = state();
        let session = session_for(&state, "a@x.com").await;

        let added = add_post_handler(
            State(state.clone()),
            session.clone(),
            Json(AddPostRequest {
                text: "hello".to_string(),
            }),
        )
        .await
        .unwrap();

        let listed = get_posts_handler(State(state.clone()), session.clone()).await;
        assert_eq!(listed.posts.get(&added.post_id).map(String::as_str), Some("hello"));

        let status = delete_post_handler(
            State(state.clone()),
            session.clone(),
            Path(added.post_id.clone()),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);

        let listed = get_posts_handler(State(state), session).await;
        assert!(listed.posts.is_empty());
    }

    #[tokio::test]
    async fn test_add_post_too_large() {
        let state = state();
        let session = session_for(&state, "a@x.com").await;

        let result = add_post_handler(
            State(state.clone()),
            session,
            Json(AddPostRequest {
                text: "x".repeat(MAX_POST_BYTES + 1),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::PayloadTooLarge { .. })));
        assert!(state.posts.read().await.is_empty());
    }

    async fn add(state: &AppState, session: &AuthSession, text: &str) -> String {
        add_post_handler(
            State(state.clone()),
            session.clone(),
            Json(AddPostRequest {
                text: text.to_string(),
            }),
        )
        .await
        .unwrap()
        .0
        .post_id
    }

    #[tokio::test]
    async fn test_other_account_sees_and_deletes_post() {
        let state = state();
        let alice = session_for(&state, "alice@x.com").await;
        let bob = session_for(&state, "bob@x.com").await;

        let post_id = add(&state, &alice, "alice's").await;

        let listed = get_posts_handler(State(state.clone()), bob.clone()).await;
        assert_eq!(listed.posts.get(&post_id).map(String::as_str), Some("alice's"));

        let status = delete_post_handler(State(state.clone()), bob, Path(post_id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);

        let listed = get_posts_handler(State(state), alice).await;
        assert!(listed.posts.is_empty());
    }

    #[tokio::test]
    async fn test_post_matching_caller_token_is_hidden_and_kept() {
        let state = state();
        let alice = session_for(&state, "alice@x.com").await;
        let bob = session_for(&state, "bob@x.com").await;

        let post_id = add(&state, &bob, &alice.token).await;

        let listed = get_posts_handler(State(state.clone()), alice.clone()).await;
        assert!(!listed.posts.contains_key(&post_id));

        let result = delete_post_handler(State(state.clone()), alice, Path(post_id.clone())).await;
        assert!(matches!(result, Err(ApiError::PostNotFound(_))));

        let listed = get_posts_handler(State(state), bob).await;
        assert!(listed.posts.contains_key(&post_id));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = state();
        session_for(&state, "a@x.com").await;

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.sessions.live_entries, 1);
        assert_eq!(response.posts.live_entries, 0);
    }
}
