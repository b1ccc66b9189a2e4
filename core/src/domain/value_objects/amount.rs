//! Money amount value object
//!
//! Amounts are stored as integer cents. Decimal input is converted with
//! round-half-away-from-zero, and arithmetic happens in cent space.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

const CENT_MULTIPLIER: i64 = 100;
const NON_POSITIVE_MESSAGE: &str = "Amount cannot be negative or zero.";

/// Strictly positive money amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount {
    cents: i64,
}

impl Amount {
    /// Whole currency units
    pub fn from_int(value: i64) -> Result<Self, ValidationError> {
        let cents = value.checked_mul(CENT_MULTIPLIER).ok_or_else(out_of_range)?;
        Self::from_cents(cents)
    }

    pub fn from_float(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(not_numeric());
        }
        let decimal = Decimal::from_f64(value).ok_or_else(out_of_range)?;
        Self::from_decimal(decimal)
    }

    /// Numeric string such as `"122"`, `"10.50"` or `"1.5e2"`
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| not_numeric())?;
        Self::from_decimal(decimal)
    }

    pub fn from_decimal(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(non_positive());
        }

        let cents = value
            .checked_mul(Decimal::from(CENT_MULTIPLIER))
            .ok_or_else(out_of_range)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(out_of_range)?;

        Self::from_cents(cents)
    }

    /// Rehydrate a stored cent value
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents <= 0 {
            return Err(non_positive());
        }
        Ok(Self { cents })
    }

    /// Value in cents
    pub fn value(&self) -> i64 {
        self.cents
    }

    /// Value in currency units with two decimal places
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }

    pub fn greater_than(&self, other: &Amount) -> bool {
        self.cents > other.cents
    }

    pub fn add(&self, other: &Amount) -> Result<Amount, ValidationError> {
        let cents = self.cents.checked_add(other.cents).ok_or_else(out_of_range)?;
        Self::from_cents(cents)
    }

    /// Fails when the result would not be strictly positive
    pub fn subtract(&self, other: &Amount) -> Result<Amount, ValidationError> {
        Self::from_cents(self.cents - other.cents)
    }
}

fn non_positive() -> ValidationError {
    ValidationError::invalid("amount", NON_POSITIVE_MESSAGE)
}

fn not_numeric() -> ValidationError {
    ValidationError::invalid("amount", "Amount must be a numeric value.")
}

fn out_of_range() -> ValidationError {
    ValidationError::invalid("amount", "Amount is out of range.")
}

impl TryFrom<i64> for Amount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Amount::from_int(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::from_float(value)
    }
}

impl TryFrom<&str> for Amount {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Amount::parse(value)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / CENT_MULTIPLIER, self.cents % CENT_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_are_stored_in_cents() {
        assert_eq!(Amount::from_int(122).unwrap().value(), 12200);
        assert_eq!(Amount::from_float(122.00).unwrap().value(), 12200);
        assert_eq!(Amount::parse("122.00").unwrap().value(), 12200);
        assert_eq!(Amount::parse(" 10.5 ").unwrap().value(), 1050);
        assert_eq!(Amount::parse("1.5e2").unwrap().value(), 15000);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(Amount::parse("10.005").unwrap().value(), 1001);
        assert_eq!(Amount::parse("10.004").unwrap().value(), 1000);
        assert_eq!(Amount::parse("0.015").unwrap().value(), 2);
        assert_eq!(Amount::from_float(0.125).unwrap().value(), 13);
    }

    #[test]
    fn test_non_positive_inputs_fail() {
        for raw in ["0", "-1", "-0.01", "0.004"] {
            let err = Amount::parse(raw).unwrap_err();
            assert_eq!(err.to_string(), NON_POSITIVE_MESSAGE, "input {raw}");
        }
        assert!(Amount::from_int(0).is_err());
        assert!(Amount::from_float(-3.5).is_err());
        assert!(Amount::from_cents(0).is_err());
    }

    #[test]
    fn test_non_numeric_inputs_fail() {
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(Amount::from_float(f64::NAN).is_err());
        assert!(Amount::from_float(f64::INFINITY).is_err());
    }

    #[test]
    fn test_add_is_exact_in_cents() {
        let total = Amount::from_float(10.50).unwrap().add(&Amount::from_float(5.25).unwrap()).unwrap();
        assert_eq!(total.value(), 1575);
        assert_eq!(total, Amount::parse("15.75").unwrap());

        let tenths = Amount::from_float(0.1).unwrap().add(&Amount::from_float(0.2).unwrap()).unwrap();
        assert_eq!(tenths.value(), 30);
    }

    #[test]
    fn test_subtract() {
        let a = Amount::parse("20.00").unwrap();
        let b = Amount::parse("5.25").unwrap();
        assert_eq!(a.subtract(&b).unwrap().value(), 1475);
        assert!(b.subtract(&a).is_err());
        assert!(a.subtract(&a).is_err());
    }

    #[test]
    fn test_comparisons() {
        let small = Amount::from_int(1).unwrap();
        let large = Amount::from_int(2).unwrap();
        assert!(large.greater_than(&small));
        assert!(!small.greater_than(&large));
        assert_eq!(small, Amount::from_cents(100).unwrap());
    }

    #[test]
    fn test_decimal_and_display() {
        let amount = Amount::parse("1234.5").unwrap();
        assert_eq!(amount.as_decimal(), Decimal::new(123450, 2));
        assert_eq!(amount.to_string(), "1234.50");
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(Amount::from_int(i64::MAX).is_err());
        let max = Amount::from_cents(i64::MAX).unwrap();
        assert!(max.add(&Amount::from_cents(1).unwrap()).is_err());
    }
}
