//! Schema health
//!
//! Reports whether the database answers and whether every known migration
//! has been applied. Anything short of that is 503 so a supervisor can hold
//! traffic until `superlists migrate` has run.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::migrations;
use crate::http::server::AppState;

/// Schema health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, `migrations_pending` or `database_unavailable`
    pub status: &'static str,
    /// Highest applied migration, 0 when none or unknown
    pub schema_version: i64,
    pub expected_version: i64,
    /// Names of migrations not yet applied
    pub pending: Vec<&'static str>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let expected_version = migrations::latest_version();

    let applied = match migrations::applied(&state.pool).await {
        Ok(applied) => applied,
        Err(e) => {
            tracing::error!("health check could not read schema: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "database_unavailable",
                    schema_version: 0,
                    expected_version,
                    pending: Vec::new(),
                }),
            );
        }
    };

    let pending: Vec<&'static str> = migrations::pending(&applied)
        .into_iter()
        .map(|m| m.name)
        .collect();
    let schema_version = applied.last().copied().unwrap_or(0);

    let (code, status) = if pending.is_empty() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "migrations_pending")
    };

    (
        code,
        Json(HealthResponse {
            status,
            schema_version,
            expected_version,
            pending,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
