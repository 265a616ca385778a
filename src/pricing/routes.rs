//! Pricing route handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::AppState;

use super::addons::AddOn;
use super::calculators::compute_quote;
use super::requests::{QuoteRequest, VehicleQuoteRequest};
use super::responses::{AddOnCatalogEntry, QuoteResponse, VehicleQuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/add-ons", get(list_add_ons))
        .route("/api/pricing/quote", post(quote))
        .route("/api/vehicles/:id/quote", post(quote_vehicle))
}

/// Add-on catalog
async fn list_add_ons() -> Json<Vec<AddOnCatalogEntry>> {
    Json(AddOn::ALL.into_iter().map(AddOnCatalogEntry::from).collect())
}

/// Quote from raw rates
async fn quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    request.validate()?;
    let input = request.into_input();
    let result = compute_quote(&input);

    Ok(Json(QuoteResponse::from_quote(
        &result,
        input.rental_days,
        input.extra_hours,
        &state.config.currency,
    )))
}

/// Quote for a stored vehicle and a pickup/return window
async fn quote_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
    ApiJson(request): ApiJson<VehicleQuoteRequest>,
) -> Result<Json<VehicleQuoteResponse>> {
    let (pickup_at, return_at) = request.window.resolve(&state.config.default_times)?;
    let priced =
        services::quote_vehicle(&state, vehicle_id, pickup_at, return_at, request.add_ons).await?;

    Ok(Json(VehicleQuoteResponse {
        vehicle_id,
        vehicle_name: priced.vehicle.name.clone(),
        pickup_at: priced.pickup_at,
        return_at: priced.return_at,
        quote: QuoteResponse::from_quote(
            &priced.quote,
            priced.duration.rental_days,
            priced.duration.extra_hours,
            &state.config.currency,
        ),
    }))
}
