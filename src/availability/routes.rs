//! Availability route handlers

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::AppState;

use super::models::BookingWindow;
use super::requests::RentalWindowRequest;
use super::services;

/// Availability verdict for a window
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: Uuid,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<BookingWindow>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/vehicles/:id/availability", post(check_availability))
}

/// Check whether a vehicle is free for the requested window.
///
/// A conflict is a normal answer here, not an error.
async fn check_availability(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
    ApiJson(request): ApiJson<RentalWindowRequest>,
) -> Result<Json<AvailabilityResponse>> {
    let (pickup_at, return_at) = request.resolve(&state.config.default_times)?;
    state.cache.vehicle(&state.db, vehicle_id).await?;

    let conflict = services::find_conflict(&state, vehicle_id, pickup_at, return_at).await?;

    Ok(Json(AvailabilityResponse {
        vehicle_id,
        available: conflict.is_none(),
        conflict,
    }))
}
