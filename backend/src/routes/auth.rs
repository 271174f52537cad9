//! Authentication routes: register, login, logout
//!
//! Registration and login both issue a token and persist the session
//! identity, so browser clients ride the cookie while API clients can keep
//! using the returned JWT.

use crate::auth::SessionIdentity;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marketplace_shared::{AuthResponse, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

/// Register a new user
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    session: SessionIdentity,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (response, identity) = UserService::register(&state.db, state.jwt(), &req).await?;
    session.persist(&identity).await?;
    Ok(Json(response))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    session: SessionIdentity,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (response, identity) =
        UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    session.persist(&identity).await?;
    Ok(Json(response))
}

/// Destroy the session and clear the cookie
///
/// GET /logout
async fn logout(session: SessionIdentity) -> ApiResult<StatusCode> {
    session.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
