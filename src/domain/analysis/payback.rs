//! Payback period value that is either a number of years or not applicable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label used wherever a payback period cannot be computed.
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

/// Time for cumulative benefit to cover the investment.
///
/// `NotApplicable` replaces the infinite payback that would result from
/// non-positive benefits, so no infinity ever reaches formatting code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    Years(f64),
    NotApplicable,
}

impl Payback {
    /// Divides an investment by an annual return, or `NotApplicable` when the
    /// annual return is not positive.
    pub fn from_ratio(investment: f64, annual_return: f64) -> Self {
        if annual_return > 0.0 {
            Payback::Years(investment / annual_return)
        } else {
            Payback::NotApplicable
        }
    }

    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Payback::Years(_))
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Years(y) => write!(f, "{:.1} years", y),
            Payback::NotApplicable => f.write_str(NOT_APPLICABLE_LABEL),
        }
    }
}

impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payback::Years(y) => serializer.serialize_f64(*y),
            Payback::NotApplicable => serializer.serialize_str(NOT_APPLICABLE_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Payback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Years(f64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Years(y) => Ok(Payback::Years(y)),
            Repr::Label(label) if label == NOT_APPLICABLE_LABEL => Ok(Payback::NotApplicable),
            Repr::Label(other) => Err(serde::de::Error::custom(format!(
                "expected a number of years or \"{}\", got \"{}\"",
                NOT_APPLICABLE_LABEL, other
            ))),
        }
    }
}
