//! Handler for the public health check.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, Check};
use crate::state::AppState;

/// `GET /api/health`, public.
///
/// Responds `200` when the database answers and the shared id sequence is
/// readable, `503` with the same body shape otherwise:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "detail": "connected" },
///     "id_sequence": { "status": "ok", "detail": "last_value=42" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: check_database(&state).await,
        id_sequence: check_id_sequence(&state).await,
    };

    let (code, status) = if checks.all_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}

async fn check_database(state: &AppState) -> Check {
    match sqlx::query("SELECT 1").execute(state.db.as_ref()).await {
        Ok(_) => Check::ok("connected"),
        Err(e) => {
            tracing::warn!(error = %e, "database check failed");
            Check::failed("database unreachable")
        }
    }
}

async fn check_id_sequence(state: &AppState) -> Check {
    let row: Result<(i64,), _> = sqlx::query_as("SELECT last_value FROM resource_id_seq")
        .fetch_one(state.db.as_ref())
        .await;

    match row {
        Ok((last,)) => Check::ok(format!("last_value={last}")),
        Err(e) => {
            tracing::warn!(error = %e, "id sequence check failed");
            Check::failed("id sequence unavailable")
        }
    }
}
