//! Request DTOs shared by endpoints that take a pickup/return window.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::{AppError, Result};

use super::normalize::{parse_time_of_day, DefaultTimes};

/// Pickup and return as entered by the customer.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalWindowRequest {
    pub pickup_date: NaiveDate,
    #[serde(default)]
    pub pickup_time: Option<String>,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub return_time: Option<String>,
}

impl RentalWindowRequest {
    /// Resolve to `(pickup_at, return_at)`.
    ///
    /// Omitted times take the configured defaults, malformed ones are
    /// rejected, and the return must come after the pickup.
    pub fn resolve(&self, defaults: &DefaultTimes) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let pickup = resolve_time("pickup_time", self.pickup_time.as_deref(), defaults.pickup)?;
        let ret = resolve_time("return_time", self.return_time.as_deref(), defaults.return_time)?;

        let pickup_at = self.pickup_date.and_time(pickup);
        let return_at = self.return_date.and_time(ret);

        if return_at <= pickup_at {
            return Err(AppError::Validation(
                "Return must be after pickup".to_string(),
            ));
        }

        Ok((pickup_at, return_at))
    }
}

fn resolve_time(field: &str, raw: Option<&str>, default: NaiveTime) -> Result<NaiveTime> {
    match raw.map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => parse_time_of_day(raw).ok_or_else(|| {
            AppError::Validation(format!("{} must be HH:MM or HH:MM:SS, got {:?}", field, raw))
        }),
        None => Ok(default),
    }
}
