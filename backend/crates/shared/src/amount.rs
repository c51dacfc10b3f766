//! Monetary Amount Value Object
//!
//! A strictly-positive decimal amount. Used for donation amounts and
//! campaign goals; both domains share the same validation rule.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::error::app_error::{AppError, AppResult};

/// Strictly-positive monetary amount.
///
/// Construction fails for zero or negative values. The inner value keeps
/// full decimal precision; conversion to the provider's smallest currency
/// unit rounds to the nearest integer. Deliberately not `Deserialize`:
/// request bodies carry raw decimals that must pass through [`Amount::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new amount, rejecting zero and negative values
    pub fn new(value: Decimal) -> AppResult<Self> {
        if value <= Decimal::ZERO {
            return Err(AppError::bad_request("Amount must be a positive number."));
        }
        Ok(Self(value))
    }

    /// Create from a database value (assumed already validated)
    pub const fn from_db(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the inner decimal
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Convert to the smallest currency unit (cents for USD)
    ///
    /// `25.00` becomes `2500`; fractional cents round to nearest.
    pub fn to_minor_units(&self) -> Option<i64> {
        (self.0 * Decimal::from(100)).round().to_i64()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_amount_positive() {
        assert!(Amount::new(Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(Amount::new(Decimal::from(25)).is_ok());
    }

    #[test]
    fn test_amount_rejects_zero_and_negative() {
        assert!(Amount::new(Decimal::ZERO).is_err());
        assert!(Amount::new(Decimal::from(-5)).is_err());
    }

    #[test]
    fn test_minor_units() {
        let amount = Amount::new(Decimal::from_str("25.00").unwrap()).unwrap();
        assert_eq!(amount.to_minor_units(), Some(2500));

        let amount = Amount::new(Decimal::from_str("10.555").unwrap()).unwrap();
        assert_eq!(amount.to_minor_units(), Some(1056));

        let amount = Amount::new(Decimal::from_str("0.01").unwrap()).unwrap();
        assert_eq!(amount.to_minor_units(), Some(1));
    }

    #[test]
    fn test_amount_serde() {
        let amount = Amount::new(Decimal::from_str("12.50").unwrap()).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"12.50\"");
    }
}
