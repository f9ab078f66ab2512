//! Planning session aggregate.
//!
//! Holds everything a user enters while working through the questionnaire.
//! The caller owns the session and passes it by reference to the engines;
//! nothing here is shared or persisted.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    CapabilityAssessment, Goal, ImpactAnalysis, Initiative, InitiativeProfile, PlanningError,
    RecordKind, Stakeholder, StakeholderProfile,
};
use crate::domain::analysis::{
    ActionPlan, ActionPlanner, ImpactSummary, PlanItem, PortfolioAnalyzer, PortfolioItem,
    PortfolioRecommendations, ReadinessSelections, StakeholderItem, StakeholderMapper,
    StakeholderPosition,
};
use crate::domain::foundation::{SessionId, Timestamp};

/// Planning session - the record store for one questionnaire run.
///
/// # Invariants
///
/// - Goals are non-empty and unique
/// - Initiatives and stakeholders always passed validation on add
/// - At most one capability assessment; saving replaces it
///
/// Sessions are only built through `new` and the add actions; there is no
/// deserialization path around them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanningSession {
    id: SessionId,
    goals: Vec<Goal>,
    business_objective: Option<String>,
    initiatives: Vec<Initiative>,
    stakeholders: Vec<Stakeholder>,
    capability_assessment: Option<CapabilityAssessment>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PlanningSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            goals: Vec::new(),
            business_objective: None,
            initiatives: Vec::new(),
            stakeholders: Vec::new(),
            capability_assessment: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn business_objective(&self) -> Option<&str> {
        self.business_objective.as_deref()
    }

    pub fn initiatives(&self) -> &[Initiative] {
        &self.initiatives
    }

    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    pub fn capability_assessment(&self) -> Option<&CapabilityAssessment> {
        self.capability_assessment.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// First initiative with the given name.
    pub fn find_initiative(&self, name: &str) -> Option<&Initiative> {
        self.initiatives.iter().find(|i| i.name() == name.trim())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a goal. Returns `false` when the goal is already listed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the text is blank
    pub fn add_goal(&mut self, text: &str) -> Result<bool, PlanningError> {
        let goal = Goal::new(text)?;
        if self.goals.contains(&goal) {
            debug!(goal = %goal, "Goal already listed");
            return Ok(false);
        }

        info!(goal = %goal, "Goal added");
        self.goals.push(goal);
        self.touch();
        Ok(true)
    }

    /// Removes the goal at `index`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `index` is out of range
    pub fn remove_goal(&mut self, index: usize) -> Result<Goal, PlanningError> {
        if index >= self.goals.len() {
            return Err(PlanningError::not_found(RecordKind::Goal, index));
        }
        let goal = self.goals.remove(index);
        info!(goal = %goal, "Goal removed");
        self.touch();
        Ok(goal)
    }

    /// Saves the business objective. Blank text clears it.
    pub fn save_business_objective(&mut self, objective: Option<&str>) {
        self.business_objective = objective
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);
        debug!(
            has_objective = self.business_objective.is_some(),
            "Business objective saved"
        );
        self.touch();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Initiatives
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds an initiative. Duplicate names are allowed but logged; lookups
    /// by name resolve to the first one.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or business problem is blank
    pub fn add_initiative(
        &mut self,
        profile: InitiativeProfile,
    ) -> Result<&Initiative, PlanningError> {
        let initiative = Initiative::new(profile)?;
        if self.find_initiative(initiative.name()).is_some() {
            warn!(
                name = initiative.name(),
                "Initiative name already used; lookups will return the first match"
            );
        }

        info!(
            name = initiative.name(),
            complexity = %initiative.profile().complexity,
            business_impact = %initiative.profile().business_impact,
            "Initiative added"
        );
        self.initiatives.push(initiative);
        self.touch();
        Ok(&self.initiatives[self.initiatives.len() - 1])
    }

    /// Removes the initiative at `index`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `index` is out of range
    pub fn remove_initiative(&mut self, index: usize) -> Result<Initiative, PlanningError> {
        if index >= self.initiatives.len() {
            return Err(PlanningError::not_found(RecordKind::Initiative, index));
        }
        let initiative = self.initiatives.remove(index);
        info!(name = initiative.name(), "Initiative removed");
        self.touch();
        Ok(initiative)
    }

    /// Saves the impact analysis of the first initiative called `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no initiative has that name
    pub fn save_impact_analysis(
        &mut self,
        name: &str,
        impact: ImpactAnalysis,
    ) -> Result<ImpactSummary, PlanningError> {
        let initiative = self
            .initiatives
            .iter_mut()
            .find(|i| i.name() == name.trim())
            .ok_or_else(|| PlanningError::not_found(RecordKind::Initiative, name))?;

        let summary = initiative.save_impact(impact);
        info!(
            name = initiative.name(),
            investment = summary.total_investment.amount(),
            roi = summary.roi_percent,
            "Impact analysis saved"
        );
        self.touch();
        Ok(summary)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Stakeholders
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a stakeholder dated `added_at`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or role is blank
    pub fn add_stakeholder(
        &mut self,
        profile: StakeholderProfile,
        added_at: NaiveDate,
    ) -> Result<&Stakeholder, PlanningError> {
        let stakeholder = Stakeholder::new(profile, added_at)?;
        info!(
            name = %stakeholder.name,
            role = %stakeholder.role,
            "Stakeholder added"
        );
        self.stakeholders.push(stakeholder);
        self.touch();
        Ok(&self.stakeholders[self.stakeholders.len() - 1])
    }

    /// Removes the stakeholder at `index`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `index` is out of range
    pub fn remove_stakeholder(&mut self, index: usize) -> Result<Stakeholder, PlanningError> {
        if index >= self.stakeholders.len() {
            return Err(PlanningError::not_found(RecordKind::Stakeholder, index));
        }
        let stakeholder = self.stakeholders.remove(index);
        info!(name = %stakeholder.name, "Stakeholder removed");
        self.touch();
        Ok(stakeholder)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Capability assessment
    // ─────────────────────────────────────────────────────────────────────────

    /// Scores and saves the capability questionnaire, replacing any earlier one.
    pub fn save_capability_assessment(
        &mut self,
        selections: ReadinessSelections,
    ) -> &CapabilityAssessment {
        let assessment = CapabilityAssessment::from_selections(selections);
        info!(
            readiness = assessment.readiness_score,
            tier = assessment.tier.label(),
            "Capability assessment saved"
        );
        self.touch();
        self.capability_assessment.insert(assessment)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    pub fn plan_items(&self) -> Vec<PlanItem<'_>> {
        self.initiatives.iter().map(Initiative::plan_item).collect()
    }

    pub fn portfolio_items(&self) -> Vec<PortfolioItem<'_>> {
        self.initiatives
            .iter()
            .map(|i| i.plan_item().portfolio_item())
            .collect()
    }

    pub fn stakeholder_items(&self) -> Vec<StakeholderItem<'_>> {
        self.stakeholders.iter().map(Stakeholder::map_item).collect()
    }

    /// Quadrant recommendations for the current portfolio.
    pub fn recommendations(&self) -> PortfolioRecommendations {
        PortfolioAnalyzer::recommendations(&self.portfolio_items())
    }

    /// Engagement strategies for the current stakeholders.
    pub fn stakeholder_map(&self) -> Vec<StakeholderPosition> {
        StakeholderMapper::map(&self.stakeholder_items())
    }

    /// Action plan with roadmap dates relative to `reference`.
    pub fn action_plan(&self, reference: Timestamp) -> ActionPlan {
        ActionPlanner::plan(&self.plan_items(), reference)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for PlanningSession {
    fn default() -> Self {
        Self::new()
    }
}
