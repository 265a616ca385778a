//! Booking models

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// Booking from bookings.
///
/// Times are free-form `HH:MM` / `HH:MM:SS` strings and may be absent.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub car_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: String,
}
