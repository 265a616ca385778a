//! Database row models

pub mod booking;
pub mod rental_request;
pub mod vehicle;

pub use booking::Booking;
pub use rental_request::{NewRentalRequest, RentalRequest};
pub use vehicle::Vehicle;
