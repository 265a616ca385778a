//! Pricing service functions with database access.
//!
//! Looks up the vehicle's rates through the cache and hands them to the pure
//! calculator.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::availability::RentalDuration;
use crate::error::{AppError, Result};
use crate::models::Vehicle;
use crate::AppState;

use super::addons::AddOn;
use super::calculators::{compute_quote, RentalQuoteInput, RentalQuoteResult};
use super::requests::{validate_period, validate_rates};

/// Quote for a stored vehicle over a concrete window
#[derive(Debug, Clone)]
pub struct VehicleQuote {
    pub vehicle: Arc<Vehicle>,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub duration: RentalDuration,
    pub quote: RentalQuoteResult,
}

/// Build calculator input from a vehicle row.
pub fn quote_input(
    vehicle: &Vehicle,
    duration: RentalDuration,
    add_ons: BTreeSet<AddOn>,
) -> Result<RentalQuoteInput> {
    validate_rates(vehicle.price_per_day, vehicle.discount())
        .map_err(|e| AppError::Internal(format!("Vehicle {} has invalid rates: {}", vehicle.id, e)))?;
    validate_period(duration.rental_days, duration.extra_hours)?;

    Ok(RentalQuoteInput {
        base_price_per_day: vehicle.price_per_day,
        discount_percent: vehicle.discount(),
        rental_days: duration.rental_days,
        extra_hours: duration.extra_hours,
        selected_add_ons: add_ons,
    })
}

/// Price a stored vehicle for the given pickup and return.
pub async fn quote_vehicle(
    state: &AppState,
    vehicle_id: Uuid,
    pickup_at: NaiveDateTime,
    return_at: NaiveDateTime,
    add_ons: BTreeSet<AddOn>,
) -> Result<VehicleQuote> {
    let duration = RentalDuration::between(pickup_at, return_at)
        .ok_or_else(|| AppError::Validation("Return must be after pickup".to_string()))?;

    let vehicle = state.cache.vehicle(&state.db, vehicle_id).await?;
    let input = quote_input(&vehicle, duration, add_ons)?;
    let quote = compute_quote(&input);

    Ok(VehicleQuote {
        vehicle,
        pickup_at,
        return_at,
        duration,
        quote,
    })
}
