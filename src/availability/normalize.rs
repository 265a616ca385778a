//! Turn stored booking rows into comparable windows.
//!
//! Stored bookings carry a date plus an optional `HH:MM` or `HH:MM:SS` time.
//! Missing times are filled from an explicit [`DefaultTimes`] so the overlap
//! check only ever sees complete instants.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::models::Booking;

use super::models::{BookingStatus, BookingWindow};

/// Times substituted when a booking row has a date but no time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTimes {
    pub pickup: NaiveTime,
    pub return_time: NaiveTime,
}

impl Default for DefaultTimes {
    fn default() -> Self {
        Self {
            pickup: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            return_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

/// Parse `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Combine a date with an optional time string.
///
/// A blank or unparseable time falls back to `default`. No date means no
/// instant.
pub fn combine(date: Option<NaiveDate>, time: Option<&str>, default: NaiveTime) -> Option<NaiveDateTime> {
    let date = date?;
    let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => parse_time_of_day(raw).unwrap_or_else(|| {
            warn!("Unparseable booking time {:?}, using default {}", raw, default);
            default
        }),
        None => default,
    };
    Some(date.and_time(time))
}

/// Window occupied by a stored booking.
pub fn booking_window(booking: &Booking, defaults: &DefaultTimes) -> BookingWindow {
    BookingWindow {
        booking_id: Some(booking.id),
        start: combine(booking.start_date, booking.start_time.as_deref(), defaults.pickup),
        end: combine(booking.end_date, booking.end_time.as_deref(), defaults.return_time),
        status: BookingStatus::parse(&booking.status),
    }
}

/// Windows for a batch of stored bookings, in the same order.
pub fn booking_windows(bookings: &[Booking], defaults: &DefaultTimes) -> Vec<BookingWindow> {
    bookings
        .iter()
        .map(|booking| booking_window(booking, defaults))
        .collect()
}
