//! Rental requests submitted from the booking form.

pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

pub use routes::router;
