//! Response DTOs for rental requests.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::responses::QuoteResponse;

/// Response for a stored rental request
#[derive(Debug, Serialize)]
pub struct RentalRequestResponse {
    pub id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub vehicle_id: Uuid,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub quote: QuoteResponse,
}
