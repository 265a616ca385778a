//! Health and cache monitoring handlers

use std::time::Duration;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness plus a quick database probe
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_ok = match tokio::time::timeout(
        Duration::from_secs(3),
        sqlx::query("SELECT 1").fetch_one(&state.db),
    )
    .await
    {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::error!("Health check DB query failed: {}", e);
            false
        }
        Err(_) => {
            tracing::error!("Health check DB query timed out (3s)");
            false
        }
    };

    let status = if db_ok { "ok" } else { "degraded" };
    Json(json!({ "status": status, "db": db_ok }))
}

/// Cache sizes
pub async fn cache_stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.cache.stats()))
}
