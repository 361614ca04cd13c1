//! Money type
//!
//! A currency-tagged decimal amount. The marketplace never does arithmetic
//! on prices; the type only carries the sign checks and equality the
//! listing rules need. Price positivity is a creation-time business rule
//! enforced by the listing service, not here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO-style currency code, e.g. `EUR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A monetary value: an amount in a currency.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use ticket_marketplace::domain::{Currency, Money};
///
/// let price = Money::new(Decimal::new(4950, 2), Currency::new("EUR"));
/// assert!(!price.is_negative());
/// assert_eq!(price.to_string(), "49.50 EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::new("EUR"))
    }

    #[test]
    fn test_sign_checks() {
        assert!(eur(dec!(-30)).is_negative());
        assert!(!eur(dec!(-30)).is_zero());

        assert!(eur(dec!(0)).is_zero());
        assert!(!eur(dec!(0)).is_negative());

        assert!(!eur(dec!(49.50)).is_negative());
        assert!(!eur(dec!(49.50)).is_zero());
    }

    #[test]
    fn test_money_display_keeps_scale() {
        assert_eq!(eur(dec!(49.50)).to_string(), "49.50 EUR");
    }

    #[test]
    fn test_money_equality() {
        assert_eq!(eur(dec!(49.50)), eur(dec!(49.50)));
        assert_ne!(eur(dec!(49.50)), Money::new(dec!(49.50), Currency::new("USD")));
    }
}
