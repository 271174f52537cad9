//! Authentication guard
//!
//! One `authenticate` path for every protected route: the [`AuthUser`]
//! extractor resolves the session-held identity and, when no session exists,
//! falls back to a Bearer token so the issued JWT stays usable by
//! non-browser clients. Both sources produce the same identity; every
//! failure is a 401, never an unhandled error.

use crate::auth::session::SessionIdentity;
use crate::auth::AuthenticatedIdentity;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated user attached to a request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: AuthenticatedIdentity,
}

impl AuthUser {
    #[inline]
    pub fn user_id(&self) -> Uuid {
        self.identity.user_id
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Session identity is the primary credential
        let session = SessionIdentity::from_request_parts(parts, state).await?;
        if let Some(identity) = session.load().await? {
            return Ok(AuthUser { identity });
        }

        // Fall back to a Bearer token for session-less clients
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Use pre-computed JWT keys from state
        let claims = app_state
            .jwt()
            .verify(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // The token does not carry the email; resolve it from the store so
        // both credential sources yield the same identity shape.
        let user = crate::repositories::UserRepository::find_by_id(app_state.db(), user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

        Ok(AuthUser {
            identity: AuthenticatedIdentity {
                user_id,
                email: user.email,
                role: claims.role,
            },
        })
    }
}
