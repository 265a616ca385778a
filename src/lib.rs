//! Pricing and availability backend for the car rental website.
//!
//! The rental price calculator and booking overlap validator are plain
//! functions in [`pricing`] and [`availability`]; the rest of the crate wires
//! them to the database and exposes them over HTTP.

pub mod availability;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod pricing;
pub mod rentals;
pub mod routes;

use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::cache::AppCache;
use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self {
            db,
            cache: AppCache::new(config.vehicle_cache_ttl),
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);

    Router::new()
        .merge(routes::router())
        .merge(pricing::router())
        .merge(availability::router())
        .merge(rentals::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_cors_origins(&config.cors_origins)))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

fn parse_cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        warn!("No valid CORS origins configured, cross-origin requests will be blocked");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/carrental_test")
            .unwrap();
        AppState::new(pool, AppConfig::for_database("postgres://localhost/carrental_test"))
    }

    async fn send(method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_quote_three_days() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000","rental_days":3}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_price"]["amount"], "3000");
        assert_eq!(json["total_price"]["currency"], "MKD");
        assert_eq!(json["tier_discount_percent"], "0");
    }

    #[tokio::test]
    async fn test_quote_eight_days() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000","rental_days":8}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tier_discount_percent"], "4");
        assert_eq!(json["total_price"]["amount"], "7680");
    }

    #[tokio::test]
    async fn test_quote_with_hours_and_mileage() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(
                r#"{
                    "base_price_per_day": "1000",
                    "discount_percent": "0",
                    "rental_days": 4,
                    "extra_hours": 12,
                    "add_ons": ["unlimitedMileage"]
                }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let base: rust_decimal::Decimal = json["base_price"]["amount"].as_str().unwrap().parse().unwrap();
        assert_eq!(base, rust_decimal_macros::dec!(4420));
        assert_eq!(json["add_ons"][0]["add_on"], "unlimitedMileage");
        assert_eq!(json["total_price"]["amount"], "6420");
    }

    #[tokio::test]
    async fn test_quote_rejects_full_day_of_hours() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000","rental_days":1,"extra_hours":24}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
    }

    #[tokio::test]
    async fn test_quote_rejects_oversized_input() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000000000000000000000","rental_days":4000000000}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
    }

    #[tokio::test]
    async fn test_quote_rejects_unknown_add_on_as_json() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000","rental_days":3,"add_ons":["jetpack"]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
        assert!(json["message"].as_str().unwrap().contains("jetpack"));
    }

    #[tokio::test]
    async fn test_quote_rejects_negative_days_as_json() {
        let (status, json) = send(
            "POST",
            "/api/pricing/quote",
            Some(r#"{"base_price_per_day":"1000","rental_days":-1}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
    }

    #[tokio::test]
    async fn test_availability_rejects_malformed_date_as_json() {
        let (status, json) = send(
            "POST",
            "/api/vehicles/6f1c2a8e-0b7d-4a8e-9f55-3d2c1b0a9e87/availability",
            Some(r#"{"pickup_date":"06/01/2024","return_date":"2024-06-03"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
    }

    #[test]
    fn test_invalid_cors_origins_are_skipped() {
        let origins = vec![
            "https://rent.example.mk".to_string(),
            "bad\norigin".to_string(),
        ];
        let parsed = parse_cors_origins(&origins);
        assert_eq!(parsed, vec![HeaderValue::from_static("https://rent.example.mk")]);
    }

    #[tokio::test]
    async fn test_add_on_catalog() {
        let (status, json) = send("GET", "/api/pricing/add-ons", None).await;

        assert_eq!(status, StatusCode::OK);
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0]["id"], "unlimitedMileage");
        assert_eq!(entries[0]["pricing"], "percent_of_rental");
        assert_eq!(entries[0]["rate"], "50");
    }

    #[tokio::test]
    async fn test_availability_rejects_inverted_window() {
        let (status, json) = send(
            "POST",
            "/api/vehicles/6f1c2a8e-0b7d-4a8e-9f55-3d2c1b0a9e87/availability",
            Some(r#"{"pickup_date":"2024-06-05","return_date":"2024-06-01"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error_type"], "validation_error");
    }

    #[tokio::test]
    async fn test_rental_request_rejects_bad_contact() {
        let (status, json) = send(
            "POST",
            "/api/rental-requests",
            Some(
                r#"{
                    "vehicle_id": "6f1c2a8e-0b7d-4a8e-9f55-3d2c1b0a9e87",
                    "pickup_date": "2024-06-01",
                    "return_date": "2024-06-03",
                    "full_name": "Ana Petrova",
                    "email": "ana-at-example",
                    "phone": "+38970123456"
                }"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["message"].as_str().unwrap().contains("email"));
    }
}
