//! Ticket pricing and entry-fee calculation.
//!
//! All monetary arithmetic is checked [`Decimal`] math; totals and posted
//! prices are kept to whole cents.

use std::collections::BTreeMap;

use menagerie_types::{PriceList, TicketCategory};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::RegistryError;

/// Round an amount to whole cents, away from zero on midpoints.
///
/// Half-cent amounts round up: `23.045` becomes `23.05`.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Total entry fee for a party of visitors.
///
/// Every category present in `party` must have a posted price, even with a
/// count of zero. An empty party owes nothing.
pub fn calculate_entry(
    prices: &PriceList,
    party: &BTreeMap<TicketCategory, u32>,
) -> Result<Decimal, RegistryError> {
    let mut total = Decimal::ZERO;
    for (&category, &count) in party {
        let price = prices
            .get(category)
            .ok_or(RegistryError::PriceNotPosted(category))?;
        let subtotal = Decimal::from(count)
            .checked_mul(price)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        total = total
            .checked_add(subtotal)
            .ok_or(RegistryError::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// Adjust every posted price by `percentage`, rounding to whole cents.
///
/// A negative percentage cuts prices; anything below `-100` would turn
/// prices negative and is rejected. Categories with no posted price are
/// left unposted.
pub fn increase_prices(
    prices: &mut PriceList,
    percentage: Decimal,
) -> Result<(), RegistryError> {
    if percentage < Decimal::new(-100, 0) {
        return Err(RegistryError::PercentageOutOfRange(percentage));
    }
    let factor = percentage
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    for category in TicketCategory::ALL {
        if let Some(price) = prices.get(category) {
            let delta = price
                .checked_mul(factor)
                .ok_or(RegistryError::ArithmeticOverflow)?;
            let adjusted = price
                .checked_add(delta)
                .ok_or(RegistryError::ArithmeticOverflow)?;
            prices.set(category, round_to_cents(adjusted));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn make_prices() -> PriceList {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Adult, dec!(49.58));
        prices.set(TicketCategory::Child, dec!(20.95));
        prices.set(TicketCategory::Senior, dec!(24.80));
        prices
    }

    #[test]
    fn rounding_is_away_from_zero_on_midpoints() {
        assert_eq!(round_to_cents(dec!(23.045)), dec!(23.05));
        assert_eq!(round_to_cents(dec!(3.375)), dec!(3.38));
        assert_eq!(round_to_cents(dec!(49.58)), dec!(49.58));
    }

    #[test]
    fn entry_fee_sums_each_category() {
        let prices = make_prices();
        let party = BTreeMap::from([
            (TicketCategory::Adult, 2),
            (TicketCategory::Child, 3),
            (TicketCategory::Senior, 1),
        ]);
        assert_eq!(calculate_entry(&prices, &party).ok(), Some(dec!(186.81)));
    }

    #[test]
    fn empty_party_owes_nothing() {
        let prices = make_prices();
        assert_eq!(
            calculate_entry(&prices, &BTreeMap::new()).ok(),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn zero_count_contributes_nothing() {
        let prices = make_prices();
        let party = BTreeMap::from([(TicketCategory::Adult, 0)]);
        assert_eq!(calculate_entry(&prices, &party).ok(), Some(Decimal::ZERO));
    }

    #[test]
    fn unposted_category_fails_the_calculation() {
        let prices = PriceList::new();
        let party = BTreeMap::from([(TicketCategory::Child, 1)]);
        assert!(matches!(
            calculate_entry(&prices, &party),
            Err(RegistryError::PriceNotPosted(TicketCategory::Child))
        ));
    }

    #[test]
    fn ten_percent_increase_matches_hand_math() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Adult, dec!(10));
        prices.set(TicketCategory::Child, dec!(5));
        prices.set(TicketCategory::Senior, dec!(7));
        assert!(increase_prices(&mut prices, dec!(10)).is_ok());
        assert_eq!(prices.get(TicketCategory::Adult), Some(dec!(11)));
        assert_eq!(prices.get(TicketCategory::Child), Some(dec!(5.5)));
        assert_eq!(prices.get(TicketCategory::Senior), Some(dec!(7.7)));
    }

    #[test]
    fn increase_rounds_midpoints_up() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Child, dec!(20.95));
        // 20.95 * 1.10 = 23.045, which rounds to 23.05 rather than 23.04.
        assert!(increase_prices(&mut prices, dec!(10)).is_ok());
        assert_eq!(prices.get(TicketCategory::Child), Some(dec!(23.05)));
    }

    #[test]
    fn increases_compound_across_calls() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Adult, dec!(10));
        assert!(increase_prices(&mut prices, dec!(10)).is_ok());
        assert!(increase_prices(&mut prices, dec!(10)).is_ok());
        assert_eq!(prices.get(TicketCategory::Adult), Some(dec!(12.10)));
    }

    #[test]
    fn negative_percentage_cuts_prices() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Adult, dec!(10));
        assert!(increase_prices(&mut prices, dec!(-50)).is_ok());
        assert_eq!(prices.get(TicketCategory::Adult), Some(dec!(5)));

        assert!(increase_prices(&mut prices, dec!(-100)).is_ok());
        assert_eq!(prices.get(TicketCategory::Adult), Some(Decimal::ZERO));
    }

    #[test]
    fn cut_below_minus_hundred_is_rejected() {
        let mut prices = make_prices();
        let before = prices.clone();
        assert!(matches!(
            increase_prices(&mut prices, dec!(-100.01)),
            Err(RegistryError::PercentageOutOfRange(_))
        ));
        assert_eq!(prices, before);
    }

    #[test]
    fn unposted_categories_stay_unposted() {
        let mut prices = PriceList::new();
        prices.set(TicketCategory::Adult, dec!(10));
        assert!(increase_prices(&mut prices, dec!(10)).is_ok());
        assert_eq!(prices.get(TicketCategory::Child), None);
        assert_eq!(prices.get(TicketCategory::Senior), None);
        assert_eq!(prices.entries().count(), 1);
    }
}
