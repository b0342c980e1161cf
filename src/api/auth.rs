//! Bearer-token authentication.
//!
//! Authentication itself is a collaborator: tokens are minted by the
//! deployment (see [`crate::config`]) and handed to the service as a
//! token-to-user table. The [`AuthUser`] extractor resolves the
//! `Authorization: Bearer <token>` header against that table and populates the
//! acting user id, or rejects with 401 before the handler body runs.

use crate::api::error::error_response;
use crate::api::AppState;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Immutable token-to-user table.
///
/// Shared behind an `Arc`; clones are cheap and the table never changes after
/// startup, so no locking is needed.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    tokens: Arc<HashMap<String, String>>,
}

impl SessionRegistry {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            tokens: Arc::new(pairs.into_iter().collect()),
        }
    }

    /// Resolve a bearer token to a user id.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }
}

/// Errors raised while resolving the acting user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied.
    #[error("You must be logged in to perform this action")]
    MissingCredentials,

    /// The supplied token is not in the session registry.
    #[error("Invalid session token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, "Unauthorized", self.to_string())
    }
}

/// The authenticated user's id, extracted before the handler body runs.
///
/// Handlers that take an `AuthUser` argument are unreachable without valid
/// credentials; unauthenticated requests are answered with 401 here.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingCredentials)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingCredentials)?;

        match state.sessions.resolve(token) {
            Some(user_id) => Ok(AuthUser(user_id.to_string())),
            None => Err(AuthError::InvalidToken),
        }
    }
}
