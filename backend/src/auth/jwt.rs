//! JWT token generation and validation
//!
//! Tokens carry the user id and role, signed with a secret injected from
//! configuration. Keys are pre-computed once at startup.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use marketplace_shared::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account role at issuance time
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Design: pre-computed keys wrapped in Arc so cloning into handlers is
/// cheap. Create once at startup and store in AppState.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Issue a token for a user with the configured expiry (7 days by default)
    #[inline]
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String> {
        self.issue_with_ttl(user_id, role, self.token_expiry_secs)
    }

    /// Issue a token with an explicit time-to-live in seconds
    pub fn issue_with_ttl(&self, user_id: Uuid, role: Role, ttl_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Fails on signature mismatch, malformed payload, or elapsed expiry;
    /// never panics, whatever the input.
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}
