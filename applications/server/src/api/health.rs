/// Liveness check that also round-trips the dev store
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    /// Stored developer count, absent when storage is unreachable
    pub devs: Option<usize>,
}

/// GET /api/health
pub async fn health(State(app_state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let version = env!("CARGO_PKG_VERSION");

    match app_state.devs.select_all().await {
        Ok(rows) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok",
                version,
                storage: "ok",
                devs: Some(rows.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check could not reach storage: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "degraded",
                    version,
                    storage: "unavailable",
                    devs: None,
                }),
            )
        }
    }
}
