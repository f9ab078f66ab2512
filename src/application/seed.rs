//! Planning seed - A YAML description of a planning session.
//!
//! The seed replays the questionnaire: every entry goes through the same
//! add/save actions a collaborator would call, so validation is identical.
//!
//! ```yaml
//! business_objective: Reduce cost to serve
//! goals:
//!   - Cut support costs
//! capability:
//!   data_quality: Good
//!   infrastructure: Cloud-native
//! initiatives:
//!   - name: Support chatbot
//!     business_problem: Slow first response
//!     complexity: Low
//!     business_impact: High
//!     timeline: 3-6 months
//!     impact:
//!       cost_savings: 120000
//!       technology_cost: 40000
//! stakeholders:
//!   - name: Dana
//!     role: CFO
//!     influence: Very High
//!     interest: High
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::domain::analysis::ReadinessSelections;
use crate::domain::planning::{
    ImpactAnalysis, InitiativeProfile, PlanningError, PlanningSession, StakeholderProfile,
};

/// Errors raised while loading or applying a seed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid seed: {0}")]
    Parse(String),

    #[error(transparent)]
    Planning(#[from] PlanningError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedInitiative {
    #[serde(flatten)]
    pub profile: InitiativeProfile,
    #[serde(default)]
    pub impact: Option<ImpactAnalysis>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedStakeholder {
    #[serde(flatten)]
    pub profile: StakeholderProfile,
    /// Defaults to the day the seed is applied.
    #[serde(default)]
    pub added_at: Option<NaiveDate>,
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSeed {
    pub business_objective: Option<String>,
    pub goals: Vec<String>,
    pub capability: Option<ReadinessSelections>,
    pub initiatives: Vec<SeedInitiative>,
    pub stakeholders: Vec<SeedStakeholder>,
}

impl PlanningSeed {
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        serde_yaml::from_str(yaml).map_err(|e| SeedError::Parse(e.to_string()))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SeedError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_yaml(&yaml)
    }

    /// Replays the seed into a fresh session.
    ///
    /// # Errors
    ///
    /// The first record that fails validation aborts the build.
    pub fn build_session(&self, today: NaiveDate) -> Result<PlanningSession, SeedError> {
        let mut session = PlanningSession::new();
        self.apply(&mut session, today)?;
        Ok(session)
    }

    /// Replays the seed into an existing session.
    pub fn apply(&self, session: &mut PlanningSession, today: NaiveDate) -> Result<(), SeedError> {
        if let Some(objective) = &self.business_objective {
            session.save_business_objective(Some(objective.as_str()));
        }

        for goal in &self.goals {
            session.add_goal(goal)?;
        }

        for entry in &self.initiatives {
            let name = session.add_initiative(entry.profile.clone())?.name().to_string();
            if let Some(impact) = entry.impact {
                session.save_impact_analysis(&name, impact)?;
            }
        }

        for entry in &self.stakeholders {
            session.add_stakeholder(entry.profile.clone(), entry.added_at.unwrap_or(today))?;
        }

        if let Some(selections) = &self.capability {
            session.save_capability_assessment(selections.clone());
        }

        info!(
            goals = session.goals().len(),
            initiatives = session.initiatives().len(),
            stakeholders = session.stakeholders().len(),
            "Seed applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{Payback, ReadinessTier};
    use crate::domain::foundation::{EngagementLevel, Level, Timeline};

    const SEED: &str = r#"
business_objective: Reduce cost to serve
goals:
  - Cut support costs
  - Cut support costs
capability:
  data_quality: Excellent
  data_availability: Comprehensive
initiatives:
  - name: Support chatbot
    business_problem: Slow first response
    complexity: Low
    business_impact: High
    timeline: 3-6 months
    impact:
      cost_savings: 120000
      technology_cost: 40000
      personnel_cost: 20000
      efficiency_gain: 30
  - name: Demand forecasting
    business_problem: Stock-outs
    complexity: High
    business_impact: Medium
stakeholders:
  - name: Dana
    role: CFO
    influence: Very High
    interest: High
    sentiment: Supportive
    added_at: 2024-01-10
  - name: Lee
    role: Support lead
"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn builds_session_from_yaml() {
        let session = PlanningSeed::from_yaml(SEED).unwrap().build_session(today()).unwrap();

        assert_eq!(session.business_objective(), Some("Reduce cost to serve"));
        assert_eq!(session.goals().len(), 1);
        assert_eq!(session.initiatives().len(), 2);

        let chatbot = session.find_initiative("Support chatbot").unwrap();
        assert_eq!(chatbot.profile().timeline, Timeline::ThreeToSixMonths);
        assert_eq!(chatbot.investment_required().amount(), 60_000.0);
        assert_eq!(chatbot.expected_roi(), 100.0);
        assert_eq!(chatbot.payback_period(), Payback::Years(0.5));
        assert_eq!(chatbot.impact().unwrap().efficiency_gain.value(), 30);

        let forecasting = session.find_initiative("Demand forecasting").unwrap();
        assert_eq!(forecasting.profile().business_impact, Level::Medium);
        assert!(!forecasting.has_impact_analysis());
    }

    #[test]
    fn stakeholders_default_to_today() {
        let session = PlanningSeed::from_yaml(SEED).unwrap().build_session(today()).unwrap();
        let stakeholders = session.stakeholders();
        assert_eq!(stakeholders[0].influence, EngagementLevel::VeryHigh);
        assert_eq!(stakeholders[0].added_at, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(stakeholders[1].added_at, today());
    }

    #[test]
    fn capability_is_scored() {
        let session = PlanningSeed::from_yaml(SEED).unwrap().build_session(today()).unwrap();
        let assessment = session.capability_assessment().unwrap();
        assert!((assessment.readiness_score - 8.0 / 36.0 * 100.0).abs() < 1e-9);
        assert_eq!(assessment.tier, ReadinessTier::Low);
    }

    #[test]
    fn invalid_record_aborts() {
        let yaml = "initiatives:\n  - name: Missing problem\n";
        let err = PlanningSeed::from_yaml(yaml)
            .unwrap()
            .build_session(today())
            .unwrap_err();
        assert!(matches!(err, SeedError::Planning(PlanningError::ValidationFailed { .. })));
    }

    #[test]
    fn unknown_level_label_is_a_parse_error() {
        let yaml = "initiatives:\n  - name: X\n    business_problem: Y\n    complexity: Extreme\n";
        assert!(matches!(PlanningSeed::from_yaml(yaml), Err(SeedError::Parse(_))));
    }

    #[test]
    fn empty_seed_is_valid() {
        let session = PlanningSeed::from_yaml("{}").unwrap().build_session(today()).unwrap();
        assert!(session.initiatives().is_empty());
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let err = PlanningSeed::load("/nonexistent/seed.yaml").await.unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
