//! AI initiative record and its impact analysis.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ImpactCalculator, ImpactInputs, ImpactSummary, Payback, PlanItem};
use crate::domain::foundation::{Level, Money, Percentage, Timeline, Timestamp, ValidationError};

/// Descriptive fields of an initiative as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiativeProfile {
    pub name: String,
    pub business_problem: String,
    pub ai_solution: String,
    pub owner: String,
    pub timeline: Timeline,
    pub complexity: Level,
    pub business_impact: Level,
    pub phase1: String,
    pub phase2: String,
    pub phase3: String,
    pub primary_metric: String,
    pub secondary_metrics: String,
}

impl InitiativeProfile {
    /// Creates a profile with the two required fields set.
    pub fn new(name: impl Into<String>, business_problem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            business_problem: business_problem.into(),
            ..Self::default()
        }
    }

    /// Trims the required fields and rejects them if empty.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.name = self.name.trim().to_string();
        self.business_problem = self.business_problem.trim().to_string();

        if self.name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.business_problem.is_empty() {
            return Err(ValidationError::empty_field("business_problem"));
        }
        Ok(())
    }
}

/// Financial estimates, operational gains and risk ratings for an initiative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactAnalysis {
    #[serde(flatten)]
    pub financials: ImpactInputs,
    pub efficiency_gain: Percentage,
    pub quality_improvement: Percentage,
    pub time_savings: Percentage,
    pub technical_risk: Level,
    pub business_risk: Level,
    pub timeline_risk: Level,
}

impl ImpactAnalysis {
    pub fn new(financials: ImpactInputs) -> Self {
        Self {
            financials,
            ..Self::default()
        }
    }

    /// Derived totals, ROI and payback.
    pub fn summary(&self) -> ImpactSummary {
        ImpactCalculator::summarize(&self.financials)
    }
}

/// An AI initiative in the planning session.
///
/// # Invariants
///
/// - `name` and `business_problem` are non-empty
/// - Investment, ROI and payback are derived from `impact` on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    profile: InitiativeProfile,
    impact: Option<ImpactAnalysis>,
    created_at: Timestamp,
}

impl Initiative {
    /// Creates an initiative without impact analysis.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or business problem is blank
    pub fn new(mut profile: InitiativeProfile) -> Result<Self, ValidationError> {
        profile.validate()?;
        Ok(Self {
            profile,
            impact: None,
            created_at: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn profile(&self) -> &InitiativeProfile {
        &self.profile
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn impact(&self) -> Option<&ImpactAnalysis> {
        self.impact.as_ref()
    }

    pub fn has_impact_analysis(&self) -> bool {
        self.impact.is_some()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived figures
    // ─────────────────────────────────────────────────────────────────────────

    /// Technology + personnel + infrastructure cost; 0 before impact analysis.
    pub fn investment_required(&self) -> Money {
        self.impact
            .map(|i| i.financials.total_investment())
            .unwrap_or(Money::ZERO)
    }

    /// Expected ROI in percent; 0 before impact analysis.
    pub fn expected_roi(&self) -> f64 {
        self.impact.map(|i| i.summary().roi_percent).unwrap_or(0.0)
    }

    /// Payback period; not applicable before impact analysis.
    pub fn payback_period(&self) -> Payback {
        self.impact
            .map(|i| i.summary().payback)
            .unwrap_or(Payback::NotApplicable)
    }

    /// Total benefits; 0 before impact analysis.
    pub fn total_benefits(&self) -> Money {
        self.impact
            .map(|i| i.financials.total_benefits())
            .unwrap_or(Money::ZERO)
    }

    /// Snapshot read by the action planner.
    pub fn plan_item(&self) -> PlanItem<'_> {
        let p = &self.profile;
        PlanItem {
            name: &p.name,
            business_problem: &p.business_problem,
            owner: &p.owner,
            phase1: &p.phase1,
            phase2: &p.phase2,
            primary_metric: &p.primary_metric,
            complexity: p.complexity.label(),
            business_impact: p.business_impact.label(),
            timeline: p.timeline,
            investment_required: self.investment_required().amount(),
            expected_roi: self.expected_roi(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces any earlier impact analysis.
    pub(crate) fn save_impact(&mut self, impact: ImpactAnalysis) -> ImpactSummary {
        self.impact = Some(impact);
        impact.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn financials() -> ImpactInputs {
        ImpactInputs::new(120_000.0, 30_000.0, 0.0, 50_000.0, 40_000.0, 10_000.0).unwrap()
    }

    #[test]
    fn new_trims_and_requires_name() {
        let initiative = Initiative::new(InitiativeProfile::new("  Chatbot ", "Slow support")).unwrap();
        assert_eq!(initiative.name(), "Chatbot");

        let err = Initiative::new(InitiativeProfile::new(" ", "Slow support")).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn new_requires_business_problem() {
        let err = Initiative::new(InitiativeProfile::new("Chatbot", "")).unwrap_err();
        assert_eq!(err.field(), "business_problem");
    }

    #[test]
    fn figures_are_zero_without_impact_analysis() {
        let initiative = Initiative::new(InitiativeProfile::new("Chatbot", "Slow support")).unwrap();
        assert_eq!(initiative.investment_required(), Money::ZERO);
        assert_eq!(initiative.expected_roi(), 0.0);
        assert_eq!(initiative.payback_period(), Payback::NotApplicable);
    }

    #[test]
    fn figures_are_derived_from_impact_analysis() {
        let mut initiative =
            Initiative::new(InitiativeProfile::new("Chatbot", "Slow support")).unwrap();
        let summary = initiative.save_impact(ImpactAnalysis::new(financials()));

        assert_eq!(initiative.investment_required().amount(), 100_000.0);
        assert_eq!(initiative.total_benefits().amount(), 150_000.0);
        assert_eq!(initiative.expected_roi(), 50.0);
        assert_eq!(summary.payback, Payback::Years(100_000.0 / 150_000.0));
    }

    #[test]
    fn plan_item_uses_labels() {
        let mut profile = InitiativeProfile::new("Chatbot", "Slow support");
        profile.complexity = Level::Low;
        profile.business_impact = Level::High;
        let initiative = Initiative::new(profile).unwrap();

        let item = initiative.plan_item();
        assert_eq!(item.complexity, "Low");
        assert_eq!(item.business_impact, "High");
        assert_eq!(item.investment_required, 0.0);
    }

    #[test]
    fn impact_analysis_reads_flat_fields() {
        let impact: ImpactAnalysis = serde_json::from_str(
            r#"{"cost_savings": 1000.0, "technology_cost": 500.0, "efficiency_gain": 20, "technical_risk": "High"}"#,
        )
        .unwrap();
        assert_eq!(impact.financials.cost_savings.amount(), 1000.0);
        assert_eq!(impact.efficiency_gain.value(), 20);
        assert_eq!(impact.technical_risk, Level::High);
        assert_eq!(impact.business_risk, Level::Medium);
    }
}
