//! Risk adjustment suggested for scenario benefits.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Benefit reduction suggested for each distinct risk factor, in percent.
pub const REDUCTION_PER_FACTOR_PERCENT: u32 = 5;

/// Named risks that can erode projected benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    DataQualityIssues,
    TechnicalComplexity,
    UserAdoptionResistance,
    RegulatoryChanges,
    Competition,
    TechnologyObsolescence,
    IntegrationChallenges,
    SkillShortage,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 8] = [
        RiskFactor::DataQualityIssues,
        RiskFactor::TechnicalComplexity,
        RiskFactor::UserAdoptionResistance,
        RiskFactor::RegulatoryChanges,
        RiskFactor::Competition,
        RiskFactor::TechnologyObsolescence,
        RiskFactor::IntegrationChallenges,
        RiskFactor::SkillShortage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::DataQualityIssues => "Data quality issues",
            RiskFactor::TechnicalComplexity => "Technical complexity",
            RiskFactor::UserAdoptionResistance => "User adoption resistance",
            RiskFactor::RegulatoryChanges => "Regulatory changes",
            RiskFactor::Competition => "Competition",
            RiskFactor::TechnologyObsolescence => "Technology obsolescence",
            RiskFactor::IntegrationChallenges => "Integration challenges",
            RiskFactor::SkillShortage => "Skill shortage",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskFactor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskFactor::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("risk_factor", format!("unknown risk '{}'", s))
            })
    }
}

/// Suggested benefit haircut for a set of selected risks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAdjustment {
    pub factors: Vec<RiskFactor>,
    pub benefit_reduction_percent: u32,
}

impl RiskAdjustment {
    /// Counts each factor once, keeping first-seen order.
    pub fn for_factors(selected: &[RiskFactor]) -> Self {
        let mut seen = HashSet::new();
        let factors: Vec<RiskFactor> =
            selected.iter().copied().filter(|f| seen.insert(*f)).collect();
        let benefit_reduction_percent = factors.len() as u32 * REDUCTION_PER_FACTOR_PERCENT;

        Self {
            factors,
            benefit_reduction_percent,
        }
    }

    /// Applies the reduction to an annual benefit.
    pub fn adjust(&self, annual_benefit: f64) -> f64 {
        annual_benefit * (1.0 - self.benefit_reduction_percent as f64 / 100.0)
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
