use crate::server::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use rollcall_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    /// Overall status: `up` while the database answers, `degraded` otherwise
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
    /// Database reachability
    database: &'static str,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let database = match state.database.ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            "down"
        }
    };

    let body = HealthResponse {
        status: if database == "up" { "up" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
        database,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
