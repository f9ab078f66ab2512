//! Planning configuration

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::error::ValidationError;

/// Planning configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanningConfig {
    /// Fixed "today" for roadmap dates and stakeholder entries.
    /// Unset means the current UTC date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl PlanningConfig {
    /// The configured reference date, or `today` when none is set.
    pub fn reference_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(today)
    }

    /// Validate planning configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.reference_date {
            Some(date) if !(1970..=9999).contains(&date.year()) => {
                Err(ValidationError::InvalidReferenceDate(date.to_string()))
            }
            _ => Ok(()),
        }
    }
}
