//! Home and dashboard routes

use crate::auth::{AuthUser, SessionIdentity};
use crate::error::ApiResult;
use crate::services::{BusinessService, UserService};
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use marketplace_shared::{DashboardResponse, HomeResponse, SessionUser};

pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
}

/// Home: the current identity or null, no authentication required
///
/// GET /
async fn home(session: SessionIdentity) -> ApiResult<Json<HomeResponse>> {
    let user = session.load().await?.map(|identity| SessionUser {
        id: identity.user_id,
        email: identity.email,
        role: identity.role,
    });

    Ok(Json(HomeResponse {
        authenticated: user.is_some(),
        user,
    }))
}

/// Dashboard: the authenticated user plus their business, if any
///
/// GET /dashboard
async fn dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let user = UserService::get_summary(&state.db, auth_user.user_id()).await?;
    let business = BusinessService::for_owner(&state.db, auth_user.user_id()).await?;

    Ok(Json(DashboardResponse { user, business }))
}
