//! Rental request route handlers

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::error::Result;
use crate::extract::ApiJson;
use crate::pricing::responses::QuoteResponse;
use crate::AppState;

use super::requests::RentalRequestSubmission;
use super::responses::RentalRequestResponse;
use super::services;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/rental-requests", post(create_rental_request))
}

/// Submit a rental request from the booking form
async fn create_rental_request(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<RentalRequestSubmission>,
) -> Result<(StatusCode, Json<RentalRequestResponse>)> {
    let (created, priced) = services::submit_rental_request(&state, submission).await?;

    let response = RentalRequestResponse {
        id: created.id,
        status: created.status,
        created_at: created.created_at,
        vehicle_id: priced.vehicle.id,
        pickup_at: priced.pickup_at,
        return_at: priced.return_at,
        quote: QuoteResponse::from_quote(
            &priced.quote,
            priced.duration.rental_days,
            priced.duration.extra_hours,
            &state.config.currency,
        ),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
