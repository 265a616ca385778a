//! Core pricing calculation functions.
//!
//! Pure functions for rental pricing math - no database access. Every caller
//! that needs a price (the raw quote endpoint, the per-vehicle quote and the
//! rental-request submission) goes through [`compute_quote`].

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::addons::AddOn;

/// Round to specified decimal places, halves rounding up (away from zero).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use carrental_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Volume discount percentage earned by the number of whole rental days.
pub fn tier_discount_percent(rental_days: u32) -> Decimal {
    if rental_days >= 8 {
        dec!(4)
    } else if rental_days >= 4 {
        dec!(2)
    } else {
        Decimal::ZERO
    }
}

/// Daily rate after the vehicle's promotional discount.
pub fn discounted_price_per_day(base_price_per_day: Decimal, discount_percent: Decimal) -> Decimal {
    if discount_percent > Decimal::ZERO {
        base_price_per_day * (Decimal::ONE - discount_percent / dec!(100))
    } else {
        base_price_per_day
    }
}

/// Everything needed to price one rental.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuoteInput {
    pub base_price_per_day: Decimal,
    /// Promotional discount in [0, 100).
    pub discount_percent: Decimal,
    pub rental_days: u32,
    /// Partial-day remainder in [0, 24).
    pub extra_hours: u32,
    pub selected_add_ons: BTreeSet<AddOn>,
}

/// Result of a quote calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuoteResult {
    pub discounted_price_per_day: Decimal,
    pub tier_discount_percent: Decimal,
    /// Unrounded rental price before add-ons.
    pub base_price: Decimal,
    /// Unrounded cost per selected add-on.
    pub add_on_costs: BTreeMap<AddOn, Decimal>,
    /// `round(base_price + sum(add_on_costs))`, rounded once to whole units.
    pub total_price: Decimal,
}

impl RentalQuoteResult {
    /// Sum of unrounded add-on costs.
    pub fn add_on_total(&self) -> Decimal {
        sum_costs(&self.add_on_costs)
    }

    /// Add-on costs rounded to whole units for display.
    ///
    /// These are never summed into the total; the total is rounded from the
    /// unrounded values.
    pub fn rounded_add_on_costs(&self) -> BTreeMap<AddOn, Decimal> {
        self.add_on_costs
            .iter()
            .map(|(add_on, cost)| (*add_on, round_money(*cost, 0)))
            .collect()
    }
}

fn sum_costs(costs: &BTreeMap<AddOn, Decimal>) -> Decimal {
    costs.values().copied().sum()
}

/// Price a rental.
///
/// The tier discount only applies to whole days. The extra-hours remainder
/// is charged pro rata at the promotionally discounted daily rate without the
/// tier discount. Input is not re-validated: callers reject negative rates,
/// discounts outside [0, 100) and `extra_hours >= 24` beforehand.
pub fn compute_quote(input: &RentalQuoteInput) -> RentalQuoteResult {
    let discounted = discounted_price_per_day(input.base_price_per_day, input.discount_percent);
    let tier_percent = tier_discount_percent(input.rental_days);

    let whole_days = discounted
        * (Decimal::ONE - tier_percent / dec!(100))
        * Decimal::from(input.rental_days);

    let extra_hours = if input.extra_hours > 0 {
        discounted * Decimal::from(input.extra_hours) / dec!(24)
    } else {
        Decimal::ZERO
    };

    let base_price = whole_days + extra_hours;

    let add_on_costs: BTreeMap<AddOn, Decimal> = input
        .selected_add_ons
        .iter()
        .map(|add_on| (*add_on, add_on.cost(discounted, input.rental_days)))
        .collect();

    let total_price = round_money(base_price + sum_costs(&add_on_costs), 0);

    RentalQuoteResult {
        discounted_price_per_day: discounted,
        tier_discount_percent: tier_percent,
        base_price,
        add_on_costs,
        total_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(base: Decimal, days: u32, hours: u32, add_ons: &[AddOn]) -> RentalQuoteInput {
        RentalQuoteInput {
            base_price_per_day: base,
            discount_percent: Decimal::ZERO,
            rental_days: days,
            extra_hours: hours,
            selected_add_ons: add_ons.iter().copied().collect(),
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(5));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.3));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(4419.49), 0), dec!(4419));
        assert_eq!(round_money(dec!(0), 0), dec!(0));
    }

    // ==================== tier discount tests ====================

    #[test]
    fn test_tier_discount_boundaries() {
        for days in 0..4 {
            assert_eq!(tier_discount_percent(days), dec!(0), "days = {days}");
        }
        for days in 4..8 {
            assert_eq!(tier_discount_percent(days), dec!(2), "days = {days}");
        }
        for days in [8, 9, 14, 30, 365] {
            assert_eq!(tier_discount_percent(days), dec!(4), "days = {days}");
        }
    }

    #[test]
    fn test_discounted_price_per_day() {
        assert_eq!(discounted_price_per_day(dec!(1000), dec!(0)), dec!(1000));
        assert_eq!(discounted_price_per_day(dec!(1000), dec!(10)), dec!(900));
        assert_eq!(discounted_price_per_day(dec!(2500), dec!(12.5)), dec!(2187.5));
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn test_three_days_no_add_ons() {
        let quote = compute_quote(&input(dec!(1000), 3, 0, &[]));
        assert_eq!(quote.tier_discount_percent, dec!(0));
        assert_eq!(quote.base_price, dec!(3000));
        assert!(quote.add_on_costs.is_empty());
        assert_eq!(quote.total_price, dec!(3000));
    }

    #[test]
    fn test_eight_days_gets_four_percent() {
        let quote = compute_quote(&input(dec!(1000), 8, 0, &[]));
        assert_eq!(quote.tier_discount_percent, dec!(4));
        assert_eq!(quote.base_price, dec!(7680));
        assert_eq!(quote.total_price, dec!(7680));
    }

    #[test]
    fn test_extra_hours_skip_tier_discount() {
        let quote = compute_quote(&input(dec!(1000), 4, 12, &[AddOn::UnlimitedMileage]));
        assert_eq!(quote.tier_discount_percent, dec!(2));
        // 1000 * 0.98 * 4 + (12 / 24) * 1000
        assert_eq!(quote.base_price, dec!(4420));
        assert_eq!(quote.add_on_costs[&AddOn::UnlimitedMileage], dec!(2000));
        assert_eq!(quote.total_price, dec!(6420));
    }

    #[test]
    fn test_hours_only_rental() {
        let quote = compute_quote(&input(dec!(1200), 0, 6, &[AddOn::PersonalDriver]));
        assert_eq!(quote.base_price, dec!(300));
        // Add-ons are charged on whole days only
        assert_eq!(quote.add_on_costs[&AddOn::PersonalDriver], dec!(0));
        assert_eq!(quote.total_price, dec!(300));
    }

    #[test]
    fn test_promotional_discount_feeds_add_ons() {
        let mut req = input(dec!(1000), 2, 0, &[AddOn::TireAndWindshieldInsurance]);
        req.discount_percent = dec!(10);
        let quote = compute_quote(&req);
        assert_eq!(quote.discounted_price_per_day, dec!(900));
        assert_eq!(quote.base_price, dec!(1800));
        // 20% of 900 * 2, not of the list price
        assert_eq!(quote.add_on_costs[&AddOn::TireAndWindshieldInsurance], dec!(360));
        assert_eq!(quote.total_price, dec!(2160));
    }

    #[test]
    fn test_fixed_add_ons_sum() {
        let quote = compute_quote(&input(
            dec!(1000),
            3,
            0,
            &[AddOn::ChildSeat, AddOn::SimCard, AddOn::RoadsideAssistance, AddOn::AirportDelivery],
        ));
        assert_eq!(quote.add_on_costs.len(), 4);
        assert_eq!(quote.add_on_total(), dec!(2100));
        assert_eq!(quote.total_price, dec!(5100));
    }

    #[test]
    fn test_total_rounded_once() {
        let mut req = input(dec!(333.35), 1, 1, &[AddOn::UnlimitedMileage, AddOn::TireAndWindshieldInsurance]);
        req.discount_percent = dec!(3);
        let quote = compute_quote(&req);

        let expected = round_money(quote.base_price + quote.add_on_total(), 0);
        assert_eq!(quote.total_price, expected);

        let reversed: Decimal = quote.add_on_costs.values().rev().copied().sum();
        assert_eq!(round_money(quote.base_price + reversed, 0), quote.total_price);
    }

    #[test]
    fn test_rounded_line_items_do_not_drive_total() {
        let quote = compute_quote(&input(
            dec!(0.9),
            1,
            0,
            &[AddOn::UnlimitedMileage, AddOn::TireAndWindshieldInsurance],
        ));
        // base 0.9, mileage 0.45, insurance 0.18 -> 1.53 -> 2
        assert_eq!(quote.total_price, dec!(2));
        let rounded = quote.rounded_add_on_costs();
        assert_eq!(rounded[&AddOn::UnlimitedMileage], dec!(0));
        assert_eq!(rounded[&AddOn::TireAndWindshieldInsurance], dec!(0));
    }

    #[test]
    fn test_quote_is_deterministic() {
        let req = input(dec!(1750), 9, 5, &[AddOn::PriorityService, AddOn::UnlimitedMileage]);
        assert_eq!(compute_quote(&req), compute_quote(&req));
    }

    #[test]
    fn test_zero_rental() {
        let quote = compute_quote(&input(dec!(1000), 0, 0, &[AddOn::ChildSeat]));
        assert_eq!(quote.base_price, dec!(0));
        assert_eq!(quote.total_price, dec!(0));
    }
}
