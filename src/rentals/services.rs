//! Rental request submission.
//!
//! Validate, price, check the vehicle is free, then persist. The overlap
//! check always runs before the insert.

use tracing::info;

use crate::availability::services::ensure_available;
use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::{NewRentalRequest, RentalRequest};
use crate::pricing::services::{quote_vehicle, VehicleQuote};
use crate::AppState;

use super::requests::RentalRequestSubmission;

/// Submit a rental request.
///
/// Returns the stored request with the quote it was priced at. A clash with
/// an existing booking yields [`AppError::BookingConflict`].
pub async fn submit_rental_request(
    state: &AppState,
    submission: RentalRequestSubmission,
) -> Result<(RentalRequest, VehicleQuote)> {
    validator::Validate::validate(&submission)?;

    let (pickup_at, return_at) = submission.window.resolve(&state.config.default_times)?;
    let add_ons_json = serde_json::to_value(&submission.add_ons)
        .map_err(|e| AppError::Internal(format!("Failed to encode add-ons: {}", e)))?;

    let priced = quote_vehicle(
        state,
        submission.vehicle_id,
        pickup_at,
        return_at,
        submission.add_ons,
    )
    .await?;

    if !priced.vehicle.available {
        return Err(AppError::Validation(format!(
            "{} is not available for rental",
            priced.vehicle.name
        )));
    }

    ensure_available(state, submission.vehicle_id, pickup_at, return_at).await?;

    let new_request = NewRentalRequest {
        car_id: submission.vehicle_id,
        user_id: submission.user_id,
        full_name: submission.full_name.trim().to_string(),
        email: submission.email.trim().to_string(),
        phone: submission.phone.trim().to_string(),
        pickup_at,
        return_at,
        rental_days: to_i32(priced.duration.rental_days)?,
        extra_hours: to_i32(priced.duration.extra_hours)?,
        add_ons: add_ons_json,
        total_price: priced.quote.total_price,
        currency: state.config.currency.clone(),
    };

    let created = queries::insert_rental_request(&state.db, &new_request).await?;

    info!(
        "Rental request {} created for vehicle {} ({} to {}), total {} {}",
        created.id,
        new_request.car_id,
        pickup_at,
        return_at,
        new_request.total_price,
        new_request.currency
    );

    Ok((created, priced))
}

fn to_i32(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| AppError::Validation("Rental period is too long".to_string()))
}
