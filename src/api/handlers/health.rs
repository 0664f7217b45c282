//! Liveness and database health endpoint.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports whether the blog can reach its database.
///
/// # Endpoint
///
/// `GET /health`
///
/// Answers `200 OK` when every check passes and `503 Service Unavailable`
/// otherwise; the body has the same shape in both cases:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok", "latency_ms": 2 } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = probe_database(&state).await;

    let (code, status) = if database.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    (code, Json(body))
}

async fn probe_database(state: &AppState) -> ComponentCheck {
    let started = Instant::now();
    let result = sqlx::query("SELECT 1").execute(state.pool.as_ref()).await;
    let latency_ms = started.elapsed().as_millis();

    match result {
        Ok(_) => ComponentCheck {
            status: "ok",
            latency_ms,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            ComponentCheck {
                status: "error",
                latency_ms,
                error: Some(e.to_string()),
            }
        }
    }
}
