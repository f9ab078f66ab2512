//! Money value object for non-negative monetary amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// Largest accepted amount. Sums and ratios of bounded amounts stay finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// Smallest accepted non-zero amount (one cent).
pub const MIN_POSITIVE_AMOUNT: f64 = 0.01;

/// A non-negative, finite monetary amount in a single implicit currency.
///
/// Amounts are zero or within `MIN_POSITIVE_AMOUNT..=MAX_AMOUNT`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    /// Creates a Money amount for the named field.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the amount is negative, above `MAX_AMOUNT`, or a
    ///   non-zero amount below one cent
    /// - `InvalidFormat` if the amount is NaN or infinite
    pub fn try_for(field: &str, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(field, "amount must be finite"));
        }
        if amount == 0.0 {
            return Ok(Self::ZERO);
        }
        if !(MIN_POSITIVE_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(ValidationError::out_of_range(
                field,
                MIN_POSITIVE_AMOUNT,
                MAX_AMOUNT,
                amount,
            ));
        }
        Ok(Self(amount))
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::try_for("amount", amount)
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> Self {
        m.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    /// Whole-currency display with thousands separators, e.g. `$1,250,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = format!("{:.0}", self.0);
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${}", grouped)
    }
}
