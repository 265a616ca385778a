//! Rental pricing engine.
//!
//! Pure calculators for rental quotes plus the HTTP endpoints that expose
//! them.

pub mod addons;
pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use addons::AddOn;
pub use calculators::{compute_quote, round_money, RentalQuoteInput, RentalQuoteResult};
pub use routes::router;
