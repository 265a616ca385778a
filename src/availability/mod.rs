//! Booking availability.
//!
//! Normalizes stored bookings into half-open windows and checks a proposed
//! rental against them.

pub mod models;
pub mod normalize;
pub mod overlap;
pub mod requests;
pub mod routes;
pub mod services;

pub use models::{BookingStatus, BookingWindow, RentalDuration};
pub use normalize::{parse_time_of_day, DefaultTimes};
pub use overlap::find_overlap;
pub use routes::router;
