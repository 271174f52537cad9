//! User service for registration, login, and profile lookups
//!
//! # Performance
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - The JWT service is passed by reference (pre-computed keys)

use crate::auth::{AuthenticatedIdentity, JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRecord, UserRepository};
use marketplace_shared::validation::{validate_login, validate_registration};
use marketplace_shared::{AuthResponse, RegisterRequest, Role, UserSummary};
use sqlx::PgPool;
use uuid::Uuid;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Validation errors are itemized per field. A duplicate email fails
    /// with [`ApiError::DuplicateUser`] whether it is caught by the
    /// pre-flight lookup or by the unique index on insert.
    pub async fn register(
        pool: &PgPool,
        jwt: &JwtService,
        req: &RegisterRequest,
    ) -> Result<(AuthResponse, AuthenticatedIdentity), ApiError> {
        let role = validate_registration(req).map_err(ApiError::Validation)?;

        if UserRepository::email_exists(pool, &req.email).await? {
            return Err(ApiError::DuplicateUser);
        }

        // Hash on the blocking pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = match UserRepository::create(
            pool,
            req.name.trim(),
            &req.email,
            &password_hash,
            role.as_str(),
        )
        .await
        {
            Ok(user) => user,
            // Two concurrent registrations can both pass the pre-flight
            // check; the unique index decides the loser.
            Err(e) if is_unique_violation(&e) => return Err(ApiError::DuplicateUser),
            Err(e) => return Err(e.into()),
        };

        Self::finish_auth(jwt, &user, role)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password report identically so callers learn
    /// nothing about which accounts exist.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<(AuthResponse, AuthenticatedIdentity), ApiError> {
        validate_login(email, password).map_err(ApiError::Validation)?;

        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        // Verify on the blocking pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let role = Self::parse_role(&user)?;
        Self::finish_auth(jwt, &user, role)
    }

    /// Build the public summary for a stored user
    pub async fn get_summary(pool: &PgPool, user_id: Uuid) -> Result<UserSummary, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

        let role = Self::parse_role(&user)?;
        Ok(Self::summary(&user, role))
    }

    fn finish_auth(
        jwt: &JwtService,
        user: &UserRecord,
        role: Role,
    ) -> Result<(AuthResponse, AuthenticatedIdentity), ApiError> {
        let token = jwt.issue(user.id, role).map_err(ApiError::Internal)?;

        let identity = AuthenticatedIdentity {
            user_id: user.id,
            email: user.email.clone(),
            role,
        };

        Ok((
            AuthResponse {
                token,
                user: Self::summary(user, role),
            },
            identity,
        ))
    }

    fn summary(user: &UserRecord, role: Role) -> UserSummary {
        UserSummary {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role,
        }
    }

    fn parse_role(user: &UserRecord) -> Result<Role, ApiError> {
        Role::parse(&user.role).ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!(
                "stored role {:?} for user {} is not a known role",
                user.role,
                user.id
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    // Workflows are exercised through the route tests and the DB-backed
    // integration tests under backend/tests/.
}
