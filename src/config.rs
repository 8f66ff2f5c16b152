use crate::domain::money::Money;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_TAX_RATE: Decimal = dec!(0.21);
pub const DEFAULT_BASE_SHIPPING: Decimal = dec!(3.90);
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Decimal = dec!(30.00);
pub const DEFAULT_WELCOME_DISCOUNT_RATE: Decimal = dec!(0.10);

/// Immutable pricing parameters injected into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Tax rate applied to the taxable base, as a fraction (0.21 = 21%).
    pub tax_rate: Decimal,
    /// Flat shipping fee charged below the free shipping threshold.
    pub base_shipping: Money,
    /// Subtotal from which shipping is free.
    pub free_shipping_threshold: Money,
    /// Discount rate granted by the welcome coupon.
    pub welcome_discount_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            base_shipping: Money::new(DEFAULT_BASE_SHIPPING),
            free_shipping_threshold: Money::new(DEFAULT_FREE_SHIPPING_THRESHOLD),
            welcome_discount_rate: DEFAULT_WELCOME_DISCOUNT_RATE,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<()> {
        let unit = Decimal::ZERO..=Decimal::ONE;
        if !unit.contains(&self.tax_rate) {
            return Err(PricingError::ConfigError(format!(
                "tax rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        if !unit.contains(&self.welcome_discount_rate) {
            return Err(PricingError::ConfigError(format!(
                "discount rate must be between 0 and 1, got {}",
                self.welcome_discount_rate
            )));
        }
        for (name, rate) in [
            ("tax rate", self.tax_rate),
            ("discount rate", self.welcome_discount_rate),
        ] {
            if !(rate * Decimal::ONE_HUNDRED).fract().is_zero() {
                return Err(PricingError::ConfigError(format!(
                    "{name} must be a whole percentage, got {rate}"
                )));
            }
        }
        if self.base_shipping < Money::ZERO || self.free_shipping_threshold < Money::ZERO {
            return Err(PricingError::ConfigError(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
