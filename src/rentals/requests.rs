//! Request DTOs for rental request submission.

use std::collections::BTreeSet;

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::availability::requests::RentalWindowRequest;
use crate::pricing::AddOn;

/// Rental request as submitted from the booking form
#[derive(Debug, Deserialize, Validate)]
pub struct RentalRequestSubmission {
    pub vehicle_id: Uuid,
    #[serde(flatten)]
    pub window: RentalWindowRequest,
    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,
    #[validate(length(min = 2, max = 120))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 32))]
    pub phone: String,
    /// Signed-in customer, if any
    #[serde(default)]
    pub user_id: Option<Uuid>,
}
