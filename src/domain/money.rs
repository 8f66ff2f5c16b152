use crate::error::{PricingError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Represents a monetary value in the shop currency.
///
/// Wraps `rust_decimal::Decimal` so every money operation goes through checked
/// arithmetic and the same two-decimal rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to cents, half away from zero.
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(PricingError::Overflow("sum"))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(PricingError::Overflow("difference"))
    }

    /// Multiplies by a rate or factor (tax rate, discount rate).
    pub fn checked_scale(self, factor: Decimal) -> Result<Self> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or(PricingError::Overflow("product"))
    }

    pub fn times(self, quantity: u32) -> Result<Self> {
        self.checked_scale(Decimal::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(Money::new(dec!(1.005)).rounded(), Money::new(dec!(1.01)));
        assert_eq!(Money::new(dec!(6.804)).rounded(), Money::new(dec!(6.80)));
        assert_eq!(Money::new(dec!(2.125)).rounded(), Money::new(dec!(2.13)));
    }

    #[test]
    fn test_times_quantity() {
        let unit = Money::new(dec!(12.00));
        assert_eq!(unit.times(3).unwrap(), Money::new(dec!(36.00)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let huge = Money::new(Decimal::MAX);
        assert!(matches!(
            huge.checked_add(Money::new(dec!(1))),
            Err(PricingError::Overflow(_))
        ));
        assert!(matches!(huge.times(2), Err(PricingError::Overflow(_))));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_value(Money::new(dec!(3.90))).unwrap();
        assert_eq!(json, serde_json::json!(3.9));
    }
}
