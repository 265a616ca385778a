//! Top-level routes

pub mod health;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/cache/stats", get(health::cache_stats))
}
