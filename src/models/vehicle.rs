//! Vehicle models

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle from cars
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub discount_percent: Option<Decimal>,
    pub available: bool,
}

impl Vehicle {
    /// Promotional discount, zero when none is set
    pub fn discount(&self) -> Decimal {
        self.discount_percent.unwrap_or(Decimal::ZERO)
    }
}
