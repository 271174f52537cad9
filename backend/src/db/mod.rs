//! Postgres access: pool construction, migrations, readiness query
//!
//! The pool is sized from [`DatabaseConfig`]; tuning beyond that is fixed
//! here: connections are tested before reuse, idle ones are dropped after
//! ten minutes, and none lives past thirty.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Open the connection pool described by `config`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)?.application_name("marketplace");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(min_connections(config.max_connections))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(max = config.max_connections, "Database pool created");

    Ok(pool)
}

/// Keep a couple of connections warm, but never more than the pool allows
fn min_connections(max: u32) -> u32 {
    max.min(2)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// The readiness query: one round trip, no table access
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
