//! Money and currency value types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Errors raised by money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The two values are in different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// The code is not a three-letter uppercase ISO 4217 style code.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// A three-letter currency code such as `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code.
    pub fn new(code: impl Into<String>) -> Result<Self, MoneyError> {
        let code = code.into();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(MoneyError::InvalidCurrency(code))
        }
    }

    /// US dollars.
    pub fn usd() -> Self {
        Self("USD".to_string())
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

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// An amount of money in minor units of a single currency.
///
/// `Money` deliberately does not implement `PartialOrd`: ordering is only
/// meaningful within one currency, so comparisons go through [`Money::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Order two values of the same currency.
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        if !self.same_currency(other) {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn less_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? != Ordering::Greater)
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

    fn usd(amount: i64) -> Money {
        Money::new(amount, Currency::usd())
    }

    #[test]
    fn test_currency_validation() {
        assert!(Currency::new("EUR").is_ok());
        assert_eq!(
            Currency::new("usd"),
            Err(MoneyError::InvalidCurrency("usd".to_string()))
        );
        assert!(Currency::new("DOLLAR").is_err());
        assert!(Currency::new("").is_err());
    }

    #[test]
    fn test_same_currency_ordering() {
        assert_eq!(usd(50).compare(&usd(100)), Ok(Ordering::Less));
        assert_eq!(usd(100).less_than_or_equal(&usd(100)), Ok(true));
        assert_eq!(usd(100).less_than(&usd(100)), Ok(false));
        assert_eq!(usd(500).less_than_or_equal(&usd(100)), Ok(false));
    }

    #[test]
    fn test_cross_currency_comparison_fails() {
        let eur = Money::new(10, Currency::new("EUR").unwrap());
        let err = usd(10).compare(&eur).unwrap_err();
        assert_eq!(err.to_string(), "currency mismatch: USD vs EUR");
        assert!(usd(10).less_than_or_equal(&eur).is_err());
    }

    #[test]
    fn test_equality_includes_currency() {
        let eur = Money::new(50, Currency::new("EUR").unwrap());
        assert_eq!(usd(50), usd(50));
        assert_ne!(usd(50), eur);
    }

    #[test]
    fn test_serde_rejects_bad_currency() {
        let ok: Money = serde_json::from_str(r#"{"amount":5,"currency":"GBP"}"#).unwrap();
        assert_eq!(ok.to_string(), "5 GBP");

        let bad = serde_json::from_str::<Money>(r#"{"amount":5,"currency":"gbp"}"#);
        assert!(bad.is_err());
    }
}
