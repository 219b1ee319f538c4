//! Type-safe price representation.
//!
//! Prices are stored as an integer number of cents (the smallest currency
//! unit) and only turned into a decimal amount for display and arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's smallest unit (e.g., cents for USD).
    pub cents: i64,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            cents,
            currency_code,
        }
    }

    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_scales_cents() {
        let price = Price::from_cents(1000, CurrencyCode::USD);
        assert_eq!(price.amount(), Decimal::new(10, 0));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(1000, CurrencyCode::USD).to_string(), "$10.00");
        assert_eq!(Price::from_cents(1999, CurrencyCode::USD).to_string(), "$19.99");
        assert_eq!(Price::from_cents(5, CurrencyCode::USD).to_string(), "$0.05");
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(CurrencyCode::default().code(), "USD");
    }
}
