//! Response DTOs for pricing API endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::addons::{AddOn, AddOnRate};
use super::calculators::{round_money, RentalQuoteResult};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One add-on line of a quote, rounded for display
#[derive(Debug, Serialize)]
pub struct AddOnLineResponse {
    pub add_on: AddOn,
    pub cost: MoneyResponse,
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub rental_days: u32,
    pub extra_hours: u32,
    pub discounted_price_per_day: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub tier_discount_percent: Decimal,
    pub base_price: MoneyResponse,
    pub add_ons: Vec<AddOnLineResponse>,
    pub total_price: MoneyResponse,
}

impl QuoteResponse {
    pub fn from_quote(
        quote: &RentalQuoteResult,
        rental_days: u32,
        extra_hours: u32,
        currency: &str,
    ) -> Self {
        let add_ons = quote
            .rounded_add_on_costs()
            .into_iter()
            .map(|(add_on, cost)| AddOnLineResponse {
                add_on,
                cost: MoneyResponse::new(cost, currency),
            })
            .collect();

        Self {
            rental_days,
            extra_hours,
            discounted_price_per_day: MoneyResponse::new(
                round_money(quote.discounted_price_per_day, 2),
                currency,
            ),
            tier_discount_percent: quote.tier_discount_percent,
            base_price: MoneyResponse::new(round_money(quote.base_price, 2), currency),
            add_ons,
            total_price: MoneyResponse::new(quote.total_price, currency),
        }
    }
}

/// Response for a stored vehicle's quote
#[derive(Debug, Serialize)]
pub struct VehicleQuoteResponse {
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub quote: QuoteResponse,
}

/// Add-on catalog entry
#[derive(Debug, Serialize)]
pub struct AddOnCatalogEntry {
    pub id: AddOn,
    pub pricing: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

impl From<AddOn> for AddOnCatalogEntry {
    fn from(add_on: AddOn) -> Self {
        let (pricing, rate) = match add_on.rate() {
            AddOnRate::PercentOfRental(percent) => ("percent_of_rental", percent),
            AddOnRate::PerDay(amount) => ("per_day", amount),
            AddOnRate::Free => ("free", Decimal::ZERO),
        };
        Self {
            id: add_on,
            pricing,
            rate,
        }
    }
}
