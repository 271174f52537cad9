//! API request and response types

use crate::models::{Business, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
///
/// `role` arrives as a raw string so validation can report an itemized
/// error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Response to a successful registration or login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// The identity a session carries, as exposed to clients
///
/// Leaner than [`UserSummary`]: it reflects what the session itself knows,
/// without a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Home page payload: the current identity, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub user: Option<SessionUser>,
    pub authenticated: bool,
}

/// Dashboard payload: the user plus their business, if registered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub user: UserSummary,
    pub business: Option<Business>,
}

/// Public business listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessListResponse {
    pub businesses: Vec<Business>,
}

/// Response to a successful business registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterBusinessResponse {
    pub business: Business,
}
