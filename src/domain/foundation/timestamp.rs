//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days counted per planning month when laying out roadmaps.
pub const DAYS_PER_PLANNING_MONTH: i64 = 30;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at midnight UTC of the given calendar date.
    pub fn start_of(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the UTC calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding planning months (30 days each).
    pub fn add_planning_months(&self, months: i64) -> Self {
        self.add_days(months * DAYS_PER_PLANNING_MONTH)
    }

    /// Returns the calendar quarter (1-4) this timestamp falls in.
    pub fn quarter(&self) -> u32 {
        (self.0.month() - 1) / 3 + 1
    }

    /// Returns the year of this timestamp.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Minute-resolution label, e.g. `2024-01-15 10:30`.
    pub fn minute_label(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Compact date stamp, e.g. `20240115`.
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
