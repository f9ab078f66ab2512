//! Stakeholder record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::StakeholderItem;
use crate::domain::foundation::{EngagementLevel, Sentiment, ValidationError};

/// Stakeholder fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakeholderProfile {
    pub name: String,
    pub role: String,
    pub influence: EngagementLevel,
    pub interest: EngagementLevel,
    pub sentiment: Sentiment,
    pub concerns: String,
}

impl StakeholderProfile {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            ..Self::default()
        }
    }
}

/// A stakeholder in the planning session, identified by list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
    pub influence: EngagementLevel,
    pub interest: EngagementLevel,
    pub sentiment: Sentiment,
    pub concerns: String,
    pub added_at: NaiveDate,
}

impl Stakeholder {
    /// Creates a stakeholder added on `added_at`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or role is blank
    pub fn new(profile: StakeholderProfile, added_at: NaiveDate) -> Result<Self, ValidationError> {
        let name = profile.name.trim();
        let role = profile.role.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if role.is_empty() {
            return Err(ValidationError::empty_field("role"));
        }

        Ok(Self {
            name: name.to_string(),
            role: role.to_string(),
            influence: profile.influence,
            interest: profile.interest,
            sentiment: profile.sentiment,
            concerns: profile.concerns.trim().to_string(),
            added_at,
        })
    }

    /// Snapshot read by the stakeholder mapper.
    pub fn map_item(&self) -> StakeholderItem<'_> {
        StakeholderItem {
            name: &self.name,
            role: &self.role,
            influence: self.influence.label(),
            interest: self.interest.label(),
            sentiment: self.sentiment.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn requires_name_and_role() {
        let err = Stakeholder::new(StakeholderProfile::new("", "CFO"), today()).unwrap_err();
        assert_eq!(err.field(), "name");
        let err = Stakeholder::new(StakeholderProfile::new("Dana", " "), today()).unwrap_err();
        assert_eq!(err.field(), "role");
    }

    #[test]
    fn defaults_to_medium_neutral() {
        let s = Stakeholder::new(StakeholderProfile::new("Dana", "CFO"), today()).unwrap();
        assert_eq!(s.influence, EngagementLevel::Medium);
        assert_eq!(s.sentiment, Sentiment::Neutral);
        assert_eq!(s.added_at, today());
    }

    #[test]
    fn map_item_uses_labels() {
        let mut profile = StakeholderProfile::new("Dana", "CFO");
        profile.influence = EngagementLevel::VeryHigh;
        let s = Stakeholder::new(profile, today()).unwrap();
        assert_eq!(s.map_item().influence, "Very High");
    }
}
