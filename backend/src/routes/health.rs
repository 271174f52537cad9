//! Service probes
//!
//! `/health/live` answers whenever the process can still serve a request.
//! `/health/ready` verifies what a marketplace request actually depends on:
//! a reachable Postgres and the business-image upload directory.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProbeReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

impl ProbeReport {
    fn bare(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub database: Check,
    pub uploads: Check,
}

/// One dependency check: passing, or failing with the cause
#[derive(Serialize)]
pub struct Check {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Check {
    fn from_result(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                detail: None,
            },
            Err(e) => Self {
                ok: false,
                detail: Some(e.to_string()),
            },
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<ProbeReport> {
    Json(ProbeReport::bare("healthy"))
}

/// GET /health/ready
///
/// Returns 503 with the failing check's detail when a dependency is down,
/// so a load balancer stops routing here before requests start erroring.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ProbeReport>, (StatusCode, Json<ProbeReport>)> {
    let database = Check::from_result(db::health_check(state.db()).await);
    let uploads = Check::from_result(state.images().verify_dir().await);

    let ready = database.ok && uploads.ok;
    let report = ProbeReport {
        status: if ready { "ready" } else { "not_ready" },
        version: env!("CARGO_PKG_VERSION"),
        checks: Some(ReadinessChecks { database, uploads }),
    };

    if ready {
        Ok(Json(report))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(report)))
    }
}

/// GET /health/live
pub async fn liveness_check() -> Json<ProbeReport> {
    Json(ProbeReport::bare("alive"))
}
