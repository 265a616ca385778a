//! Rental request models

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Stored rental request, as returned after insert
#[derive(Debug, Clone, FromRow)]
pub struct RentalRequest {
    pub id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Row written for a new rental request
#[derive(Debug, Clone)]
pub struct NewRentalRequest {
    pub car_id: Uuid,
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub rental_days: i32,
    pub extra_hours: i32,
    pub add_ons: serde_json::Value,
    pub total_price: Decimal,
    pub currency: String,
}
