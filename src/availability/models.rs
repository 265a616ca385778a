//! Booking windows and rental durations.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle tag of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Active,
    Approved,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Parse a stored status column. Matching ignores case and surrounding
    /// whitespace; anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "active" => Self::Active,
            "approved" => Self::Approved,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    pub fn is_cancelled(self) -> bool {
        self == Self::Cancelled
    }
}

/// One reservation's occupancy of a vehicle.
///
/// Either bound may be missing for a stored record that could not be
/// resolved to an instant; such windows are never evaluated for overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    #[serde(default)]
    pub booking_id: Option<Uuid>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub status: BookingStatus,
}

impl BookingWindow {
    /// A fully specified window not yet tied to a stored booking.
    pub fn proposed(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            booking_id: None,
            start: Some(start),
            end: Some(end),
            status: BookingStatus::Pending,
        }
    }

    /// Both bounds, if present.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start?, self.end?))
    }
}

/// Length of a rental split into whole 24-hour days and leftover hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalDuration {
    pub rental_days: u32,
    /// Always in [0, 24).
    pub extra_hours: u32,
}

impl RentalDuration {
    /// Duration between pickup and return. A started hour counts as a full
    /// hour. Returns `None` unless `end` is strictly after `start`.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if end <= start {
            return None;
        }
        let span = end - start;
        let mut hours = span.num_hours();
        if span > Duration::hours(hours) {
            hours += 1;
        }
        let hours = u32::try_from(hours).ok()?;
        Some(Self {
            rental_days: hours / 24,
            extra_hours: hours % 24,
        })
    }
}
