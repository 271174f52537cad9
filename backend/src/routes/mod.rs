//! Route definitions for the marketplace API
//!
//! This module organizes all routes and applies middleware, including the
//! cookie-keyed session layer every authenticated flow depends on.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tower_sessions::{cookie::time, Expiry, MemoryStore, SessionManagerLayer};

mod auth;
mod business;
mod health;
mod home;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod business_tests;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    // In-process session store; the cookie is http-only and, matching the
    // plain-HTTP deployment this replaces, not secure-flagged.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(state.config.session.cookie_name.clone())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            state.config.session.max_age_secs,
        )));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(home::home_routes())
        .merge(auth::auth_routes())
        .merge(business::business_routes())
        // Apply middleware layers
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
