//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 503 when the store can't be reached
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database, code) = match state.store().ping().await {
        Ok(()) => ("ok", "up", StatusCode::OK),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            ("degraded", "down", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::MemoryStore;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "up");
    }
}
