//! Availability checks against stored bookings.

use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::AppState;

use super::models::BookingWindow;
use super::normalize::booking_windows;
use super::overlap::find_overlap;

/// First stored booking of the vehicle that clashes with the window, if any.
pub async fn find_conflict(
    state: &AppState,
    vehicle_id: Uuid,
    pickup_at: NaiveDateTime,
    return_at: NaiveDateTime,
) -> Result<Option<BookingWindow>> {
    let bookings = queries::list_vehicle_bookings(
        &state.db,
        vehicle_id,
        pickup_at.date(),
        return_at.date(),
    )
    .await?;

    let existing = booking_windows(&bookings, &state.config.default_times);
    let proposed = BookingWindow::proposed(pickup_at, return_at);
    let conflict = find_overlap(&proposed, &existing).cloned();

    debug!(
        "Checked {} bookings for vehicle {}: conflict = {}",
        existing.len(),
        vehicle_id,
        conflict.is_some()
    );

    Ok(conflict)
}

/// Turn a conflicting window into the error shown to the customer.
pub fn conflict_error(conflict: &BookingWindow) -> AppError {
    match conflict.bounds() {
        Some((start, end)) => AppError::BookingConflict {
            booking_id: conflict.booking_id,
            start,
            end,
        },
        None => AppError::Internal("Conflicting booking has no bounds".to_string()),
    }
}

/// Fail with [`AppError::BookingConflict`] when the window is taken.
pub async fn ensure_available(
    state: &AppState,
    vehicle_id: Uuid,
    pickup_at: NaiveDateTime,
    return_at: NaiveDateTime,
) -> Result<()> {
    match find_conflict(state, vehicle_id, pickup_at, return_at).await? {
        Some(conflict) => Err(conflict_error(&conflict)),
        None => Ok(()),
    }
}
