//! Session-held identity
//!
//! The server-side session stores exactly one shape: an
//! [`AuthenticatedIdentity`] derived once at login or registration. Handlers
//! never branch on what a session happens to contain.

use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};
use marketplace_shared::Role;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

/// Key under which the identity is stored in the session
pub(crate) const IDENTITY_KEY: &str = "identity";

/// The single representation of "who is logged in"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Newtype wrapper exposing identity-level session operations
///
/// Keeps handlers free of raw session key juggling: persist at login,
/// load on read, clear at logout.
#[derive(Clone)]
pub struct SessionIdentity(Session);

impl SessionIdentity {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated identity in the session
    pub async fn persist(&self, identity: &AuthenticatedIdentity) -> Result<(), ApiError> {
        self.0
            .insert(IDENTITY_KEY, identity)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("failed to persist session: {e}")))
    }

    /// Fetch the current identity from the session, if present
    pub async fn load(&self) -> Result<Option<AuthenticatedIdentity>, ApiError> {
        self.0
            .get::<AuthenticatedIdentity>(IDENTITY_KEY)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("failed to read session: {e}")))
    }

    /// Destroy the session: remove the server-side entry and clear the cookie
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.0
            .flush()
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("failed to destroy session: {e}")))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Internal(anyhow::anyhow!("session unavailable: {msg}")))?;
        Ok(SessionIdentity::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_through_json() {
        let identity = AuthenticatedIdentity {
            user_id: Uuid::new_v4(),
            email: "ana@x.com".to_string(),
            role: Role::Client,
        };
        let json = serde_json::to_string(&identity).unwrap();
        let back: AuthenticatedIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
