//! Request DTOs for pricing API endpoints.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::availability::requests::RentalWindowRequest;
use crate::error::{AppError, Result};

use super::addons::AddOn;
use super::calculators::RentalQuoteInput;

/// Longest rental the calculator will price.
pub const MAX_RENTAL_DAYS: u32 = 3650;

/// Highest daily rate accepted, keeps every product well inside `Decimal` range.
pub const MAX_PRICE_PER_DAY: Decimal = dec!(10000000);

/// Request to quote from raw rates (calculator page)
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub base_price_per_day: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    pub rental_days: u32,
    #[serde(default)]
    pub extra_hours: u32,
    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<()> {
        validate_rates(self.base_price_per_day, self.discount_percent)?;
        validate_period(self.rental_days, self.extra_hours)
    }

    pub fn into_input(self) -> RentalQuoteInput {
        RentalQuoteInput {
            base_price_per_day: self.base_price_per_day,
            discount_percent: self.discount_percent,
            rental_days: self.rental_days,
            extra_hours: self.extra_hours,
            selected_add_ons: self.add_ons,
        }
    }
}

/// Request to quote a stored vehicle for a pickup/return window
#[derive(Debug, Deserialize)]
pub struct VehicleQuoteRequest {
    #[serde(flatten)]
    pub window: RentalWindowRequest,
    #[serde(default)]
    pub add_ons: BTreeSet<AddOn>,
}

/// Reject rates the calculator cannot price meaningfully.
pub fn validate_rates(base_price_per_day: Decimal, discount_percent: Decimal) -> Result<()> {
    if base_price_per_day <= Decimal::ZERO {
        return Err(AppError::Validation(
            "base_price_per_day must be positive".to_string(),
        ));
    }
    if base_price_per_day > MAX_PRICE_PER_DAY {
        return Err(AppError::Validation(format!(
            "base_price_per_day must not exceed {}",
            MAX_PRICE_PER_DAY
        )));
    }
    if discount_percent < Decimal::ZERO || discount_percent >= dec!(100) {
        return Err(AppError::Validation(
            "discount_percent must be in [0, 100)".to_string(),
        ));
    }
    Ok(())
}

/// Reject rental lengths outside what the calculator prices.
pub fn validate_period(rental_days: u32, extra_hours: u32) -> Result<()> {
    if rental_days > MAX_RENTAL_DAYS {
        return Err(AppError::Validation(format!(
            "rental_days must not exceed {}",
            MAX_RENTAL_DAYS
        )));
    }
    if extra_hours >= 24 {
        return Err(AppError::Validation(
            "extra_hours must be between 0 and 23".to_string(),
        ));
    }
    Ok(())
}
