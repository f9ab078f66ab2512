//! Action-plan report built from a planning session.

use serde::{Deserialize, Serialize};

use super::ReportError;
use crate::domain::analysis::{
    ActionPlanner, EngagementStrategy, Payback, Quadrant, StakeholderMapper,
};
use crate::domain::foundation::{ReportId, SessionId, Timestamp};
use crate::domain::planning::{
    CapabilityAssessment, ImpactAnalysis, InitiativeProfile, PlanningSession, Stakeholder,
};
use crate::domain::scoring::SCORING_TABLE_VERSION;

pub const REPORT_FILE_PREFIX: &str = "action_plan";
pub const REPORT_FILE_EXTENSION: &str = "json";

/// One ranked initiative as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInitiative {
    #[serde(flatten)]
    pub profile: InitiativeProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactAnalysis>,
    pub total_benefits: f64,
    pub investment_required: f64,
    pub expected_roi: f64,
    pub payback_period: Payback,
    pub quadrant: Quadrant,
    pub priority_score: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub created_at: Timestamp,
}

/// One stakeholder as exported, with the suggested engagement strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStakeholder {
    #[serde(flatten)]
    pub stakeholder: Stakeholder,
    pub engagement_strategy: EngagementStrategy,
}

/// Snapshot of the portfolio at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlanReport {
    pub report_id: ReportId,
    pub session_id: SessionId,
    /// Minute-resolution label, e.g. `2024-01-15 10:30`.
    pub generated_date: String,
    pub generated_at: Timestamp,
    pub scoring_table_version: u32,
    pub total_initiatives: usize,
    pub high_impact_initiatives: usize,
    pub total_investment: f64,
    pub average_roi: f64,
    /// Ranked by descending priority.
    pub initiatives: Vec<ReportInitiative>,
    pub stakeholders: Vec<ReportStakeholder>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_assessment: Option<CapabilityAssessment>,
}

impl ActionPlanReport {
    /// Builds a report from the session. Roadmap dates start at `roadmap_start`.
    pub fn build(
        session: &PlanningSession,
        generated_at: Timestamp,
        roadmap_start: Timestamp,
    ) -> Self {
        let items = session.plan_items();
        let summary = ActionPlanner::summarize(&items);
        let roadmap = ActionPlanner::roadmap(&items, roadmap_start);

        let initiatives = roadmap
            .iter()
            .filter_map(|entry| {
                let initiative = session.initiatives().get(entry.index)?;
                Some(ReportInitiative {
                    profile: initiative.profile().clone(),
                    impact: initiative.impact().copied(),
                    total_benefits: initiative.total_benefits().amount(),
                    investment_required: initiative.investment_required().amount(),
                    expected_roi: initiative.expected_roi(),
                    payback_period: initiative.payback_period(),
                    quadrant: entry.quadrant,
                    priority_score: entry.priority_score,
                    start_date: entry.start_date,
                    end_date: entry.end_date,
                    created_at: *initiative.created_at(),
                })
            })
            .collect();

        let stakeholders = session
            .stakeholders()
            .iter()
            .zip(StakeholderMapper::map(&session.stakeholder_items()))
            .map(|(stakeholder, position)| ReportStakeholder {
                stakeholder: stakeholder.clone(),
                engagement_strategy: position.strategy,
            })
            .collect();

        Self {
            report_id: ReportId::new(),
            session_id: *session.id(),
            generated_date: generated_at.minute_label(),
            generated_at,
            scoring_table_version: SCORING_TABLE_VERSION,
            total_initiatives: summary.total_initiatives,
            high_impact_initiatives: summary.high_impact_initiatives,
            total_investment: summary.total_investment,
            average_roi: summary.average_roi,
            initiatives,
            stakeholders,
            goals: session.goals().iter().map(|g| g.to_string()).collect(),
            business_objective: session.business_objective().map(str::to_string),
            capability_assessment: session.capability_assessment().cloned(),
        }
    }

    /// File name the report is stored under.
    pub fn file_name(&self) -> String {
        Self::file_name_for(&self.report_id, &self.generated_at)
    }

    /// `action_plan_{YYYYMMDD}_{report_id}.json`
    pub fn file_name_for(report_id: &ReportId, generated_at: &Timestamp) -> String {
        format!(
            "{}_{}_{}.{}",
            REPORT_FILE_PREFIX,
            generated_at.date_stamp(),
            report_id,
            REPORT_FILE_EXTENSION
        )
    }

    /// Extracts the report id from a stored file name.
    pub fn parse_file_name(file_name: &str) -> Option<ReportId> {
        let stem = file_name
            .strip_prefix(REPORT_FILE_PREFIX)?
            .strip_prefix('_')?
            .strip_suffix(REPORT_FILE_EXTENSION)?
            .strip_suffix('.')?;
        let (date_stamp, id) = stem.split_once('_')?;
        if date_stamp.len() != 8 || !date_stamp.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok()
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Parse(e.to_string()))
    }

    /// The first `limit` ranked initiatives, for timeline views.
    pub fn top_initiatives(&self, limit: usize) -> &[ReportInitiative] {
        &self.initiatives[..limit.min(self.initiatives.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ImpactInputs, ReadinessSelections};
    use crate::domain::foundation::{EngagementLevel, Level, Timeline};
    use crate::domain::planning::StakeholderProfile;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn session() -> PlanningSession {
        let mut session = PlanningSession::new();
        session.add_goal("Cut support costs").unwrap();
        session.save_business_objective(Some("Operational efficiency"));

        let mut chatbot = InitiativeProfile::new("Chatbot", "Slow support");
        chatbot.complexity = Level::Low;
        chatbot.business_impact = Level::High;
        chatbot.timeline = Timeline::ThreeToSixMonths;
        session.add_initiative(chatbot).unwrap();

        let mut forecasting = InitiativeProfile::new("Forecasting", "Stock-outs");
        forecasting.complexity = Level::High;
        forecasting.business_impact = Level::Low;
        session.add_initiative(forecasting).unwrap();

        session
            .save_impact_analysis(
                "Chatbot",
                ImpactAnalysis::new(
                    ImpactInputs::new(90_000.0, 0.0, 10_000.0, 30_000.0, 15_000.0, 5_000.0)
                        .unwrap(),
                ),
            )
            .unwrap();
        session
            .save_impact_analysis(
                "Forecasting",
                ImpactAnalysis::new(ImpactInputs::new(0.0, 0.0, 0.0, 20_000.0, 0.0, 0.0).unwrap()),
            )
            .unwrap();

        let mut cfo = StakeholderProfile::new("Dana", "CFO");
        cfo.influence = EngagementLevel::VeryHigh;
        cfo.interest = EngagementLevel::High;
        session.add_stakeholder(cfo, date()).unwrap();
        session
    }

    fn report() -> ActionPlanReport {
        let at = Timestamp::start_of(date());
        ActionPlanReport::build(&session(), at, at)
    }

    #[test]
    fn summary_figures_come_from_all_initiatives() {
        let report = report();
        assert_eq!(report.total_initiatives, 2);
        assert_eq!(report.high_impact_initiatives, 1);
        assert_eq!(report.total_investment, 70_000.0);
        assert_eq!(report.average_roi, (100.0 + -100.0) / 2.0);
    }

    #[test]
    fn initiatives_are_ranked_with_dates() {
        let report = report();
        assert_eq!(report.initiatives[0].profile.name, "Chatbot");
        assert_eq!(report.initiatives[0].quadrant, Quadrant::QuickWin);
        assert_eq!(report.initiatives[0].priority_score, 200.0);
        assert_eq!(report.initiatives[1].start_date, Timestamp::start_of(date()).add_days(30));
        assert_eq!(report.initiatives[1].payback_period, Payback::NotApplicable);
    }

    #[test]
    fn stakeholders_carry_strategy() {
        let report = report();
        assert_eq!(report.stakeholders[0].stakeholder.name, "Dana");
        assert_eq!(
            report.stakeholders[0].engagement_strategy,
            EngagementStrategy::ManageClosely
        );
    }

    #[test]
    fn json_uses_flat_field_names() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generated_date"], "2024-05-20 00:00");
        assert_eq!(value["initiatives"][0]["name"], "Chatbot");
        assert_eq!(value["initiatives"][0]["timeline"], "3-6 months");
        assert_eq!(value["initiatives"][1]["payback_period"], "N/A");
        assert_eq!(value["stakeholders"][0]["influence"], "Very High");
        assert_eq!(value["stakeholders"][0]["added_at"], "2024-05-20");
        assert_eq!(value["goals"][0], "Cut support costs");
        assert!(value.get("capability_assessment").is_none());
    }

    #[test]
    fn json_round_trip_preserves_headline_metrics() {
        let report = report();
        let parsed = ActionPlanReport::from_json(&report.to_json().unwrap()).unwrap();

        assert_eq!(parsed.total_initiatives, report.total_initiatives);
        assert_eq!(parsed.initiatives.len(), report.total_initiatives);
        assert_eq!(parsed.total_investment, report.total_investment);
        assert_eq!(parsed.average_roi, report.average_roi);
        assert_eq!(parsed, report);
    }

    #[test]
    fn extreme_amounts_round_trip() {
        use crate::domain::foundation::{MAX_AMOUNT, MIN_POSITIVE_AMOUNT};

        let mut session = PlanningSession::new();
        session
            .add_initiative(InitiativeProfile::new("Costly", "Everything"))
            .unwrap();
        session
            .add_initiative(InitiativeProfile::new("Lucrative", "Nothing"))
            .unwrap();
        let m = MAX_AMOUNT;
        let cent = MIN_POSITIVE_AMOUNT;
        session
            .save_impact_analysis(
                "Costly",
                ImpactAnalysis::new(ImpactInputs::new(cent, 0.0, 0.0, m, m, m).unwrap()),
            )
            .unwrap();
        session
            .save_impact_analysis(
                "Lucrative",
                ImpactAnalysis::new(ImpactInputs::new(m, m, m, cent, 0.0, 0.0).unwrap()),
            )
            .unwrap();

        let at = Timestamp::start_of(date());
        let report = ActionPlanReport::build(&session, at, at);
        assert!(report.total_investment.is_finite());
        assert!(report.average_roi.is_finite());
        assert!(report.initiatives.iter().all(|i| i.expected_roi.is_finite()));

        let json = report.to_json().unwrap();
        assert!(!json.contains("null"));
        let parsed = ActionPlanReport::from_json(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn oversized_cost_is_rejected_before_saving() {
        assert!(ImpactInputs::new(0.0, 0.0, 0.0, f64::MAX / 2.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn capability_assessment_is_exported_when_present() {
        let mut session = session();
        session.save_capability_assessment(ReadinessSelections::default());
        let at = Timestamp::start_of(date());
        let report = ActionPlanReport::build(&session, at, at);
        assert!(report.capability_assessment.is_some());
    }

    #[test]
    fn empty_session_report() {
        let at = Timestamp::start_of(date());
        let report = ActionPlanReport::build(&PlanningSession::new(), at, at);
        assert_eq!(report.total_initiatives, 0);
        assert_eq!(report.average_roi, 0.0);
        assert!(report.top_initiatives(5).is_empty());
    }

    #[test]
    fn file_name_has_date_and_id() {
        let report = report();
        assert_eq!(
            report.file_name(),
            format!("action_plan_20240520_{}.json", report.report_id)
        );
    }

    #[test]
    fn parse_file_name_recovers_id() {
        let report = report();
        assert_eq!(
            ActionPlanReport::parse_file_name(&report.file_name()),
            Some(report.report_id)
        );
        assert_eq!(ActionPlanReport::parse_file_name("action_plan_2024_x.json"), None);
        assert_eq!(
            ActionPlanReport::parse_file_name(&format!("{}.tmp", report.file_name())),
            None
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ActionPlanReport::from_json("{\"report_id\": 1}"),
            Err(ReportError::Parse(_))
        ));
    }
}
