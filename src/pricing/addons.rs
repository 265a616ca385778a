//! Static add-on catalog.
//!
//! Every optional extra a customer can attach to a rental, with the rule used
//! to price it. The catalog is fixed at compile time and shared process-wide.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Optional rental extra, identified on the wire by its camelCase id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOn {
    UnlimitedMileage,
    TireAndWindshieldInsurance,
    PersonalDriver,
    PriorityService,
    ChildSeat,
    SimCard,
    RoadsideAssistance,
    AirportDelivery,
}

/// How an add-on is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnRate {
    /// Fraction of (discounted daily rate x whole rental days).
    PercentOfRental(Decimal),
    /// Fixed amount per whole rental day.
    PerDay(Decimal),
    /// Selectable flag with no charge.
    Free,
}

impl AddOn {
    pub const ALL: [AddOn; 8] = [
        AddOn::UnlimitedMileage,
        AddOn::TireAndWindshieldInsurance,
        AddOn::PersonalDriver,
        AddOn::PriorityService,
        AddOn::ChildSeat,
        AddOn::SimCard,
        AddOn::RoadsideAssistance,
        AddOn::AirportDelivery,
    ];

    /// Wire identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AddOn::UnlimitedMileage => "unlimitedMileage",
            AddOn::TireAndWindshieldInsurance => "tireAndWindshieldInsurance",
            AddOn::PersonalDriver => "personalDriver",
            AddOn::PriorityService => "priorityService",
            AddOn::ChildSeat => "childSeat",
            AddOn::SimCard => "simCard",
            AddOn::RoadsideAssistance => "roadsideAssistance",
            AddOn::AirportDelivery => "airportDelivery",
        }
    }

    pub fn rate(self) -> AddOnRate {
        match self {
            AddOn::UnlimitedMileage => AddOnRate::PercentOfRental(dec!(50)),
            AddOn::TireAndWindshieldInsurance => AddOnRate::PercentOfRental(dec!(20)),
            AddOn::PersonalDriver => AddOnRate::PerDay(dec!(800)),
            AddOn::PriorityService => AddOnRate::PerDay(dec!(1000)),
            AddOn::ChildSeat => AddOnRate::PerDay(dec!(100)),
            AddOn::SimCard => AddOnRate::PerDay(dec!(100)),
            AddOn::RoadsideAssistance => AddOnRate::PerDay(dec!(500)),
            AddOn::AirportDelivery => AddOnRate::Free,
        }
    }

    /// Unrounded cost of this add-on for a rental.
    ///
    /// Only whole rental days are charged; the partial-day remainder of a
    /// rental never carries add-on surcharges.
    pub fn cost(self, discounted_price_per_day: Decimal, rental_days: u32) -> Decimal {
        let days = Decimal::from(rental_days);
        match self.rate() {
            AddOnRate::PercentOfRental(percent) => {
                discounted_price_per_day * days * percent / dec!(100)
            }
            AddOnRate::PerDay(amount) => amount * days,
            AddOnRate::Free => Decimal::ZERO,
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
