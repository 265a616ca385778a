//! Booking overlap detection.
//!
//! Pure functions over already-fetched windows. Windows are half-open
//! `[start, end)`, so a booking returned at 17:00 does not clash with one
//! picked up at 17:00.

use chrono::NaiveDateTime;

use super::models::BookingWindow;

/// Half-open interval intersection.
pub fn intervals_overlap(
    start_a: NaiveDateTime,
    end_a: NaiveDateTime,
    start_b: NaiveDateTime,
    end_b: NaiveDateTime,
) -> bool {
    start_a < end_b && end_a > start_b
}

/// First existing window that conflicts with `proposed`, if any.
///
/// Cancelled windows and windows missing either bound are skipped. A
/// proposed window missing a bound conflicts with nothing.
pub fn find_overlap<'a, I>(proposed: &BookingWindow, existing: I) -> Option<&'a BookingWindow>
where
    I: IntoIterator<Item = &'a BookingWindow>,
{
    let (start, end) = proposed.bounds()?;

    existing
        .into_iter()
        .filter(|window| !window.status.is_cancelled())
        .find(|window| match window.bounds() {
            Some((other_start, other_end)) => intervals_overlap(start, end, other_start, other_end),
            None => false,
        })
}
