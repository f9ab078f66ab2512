//! Percentage value object for operational-impact sliders (0-100).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Creates a Percentage, clamping to 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage for the named field, rejecting values above 100.
    pub fn try_for(field: &str, value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                field,
                0.0,
                100.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_for("percentage", value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
