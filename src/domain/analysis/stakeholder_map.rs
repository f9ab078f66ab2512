//! Stakeholder Mapper - Influence/interest scoring and engagement strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scoring::engagement_score;

/// Score at or above which influence or interest counts as high.
pub const HIGH_ENGAGEMENT_SCORE: u8 = 3;

/// How a stakeholder should be engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementStrategy {
    #[serde(rename = "Manage Closely")]
    ManageClosely,
    #[serde(rename = "Keep Satisfied")]
    KeepSatisfied,
    #[serde(rename = "Keep Informed")]
    KeepInformed,
    Monitor,
}

impl EngagementStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            EngagementStrategy::ManageClosely => "Manage Closely",
            EngagementStrategy::KeepSatisfied => "Keep Satisfied",
            EngagementStrategy::KeepInformed => "Keep Informed",
            EngagementStrategy::Monitor => "Monitor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EngagementStrategy::ManageClosely => "High influence, high interest - Key decision makers",
            EngagementStrategy::KeepSatisfied => "High influence, low interest - Need regular updates",
            EngagementStrategy::KeepInformed => "Low influence, high interest - Share progress",
            EngagementStrategy::Monitor => "Low influence, low interest - Minimal effort",
        }
    }
}

impl fmt::Display for EngagementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fields of a stakeholder the mapper reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeholderItem<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub influence: &'a str,
    pub interest: &'a str,
    pub sentiment: &'a str,
}

/// A stakeholder placed on the influence/interest matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderPosition {
    pub name: String,
    pub role: String,
    pub influence_score: u8,
    pub interest_score: u8,
    pub sentiment: String,
    pub strategy: EngagementStrategy,
}

pub struct StakeholderMapper;

impl StakeholderMapper {
    /// Picks a strategy from influence and interest scores.
    pub fn strategy_for(influence_score: u8, interest_score: u8) -> EngagementStrategy {
        let influential = influence_score >= HIGH_ENGAGEMENT_SCORE;
        let interested = interest_score >= HIGH_ENGAGEMENT_SCORE;

        match (influential, interested) {
            (true, true) => EngagementStrategy::ManageClosely,
            (true, false) => EngagementStrategy::KeepSatisfied,
            (false, true) => EngagementStrategy::KeepInformed,
            (false, false) => EngagementStrategy::Monitor,
        }
    }

    /// Maps every stakeholder, preserving input order.
    pub fn map(stakeholders: &[StakeholderItem<'_>]) -> Vec<StakeholderPosition> {
        stakeholders
            .iter()
            .map(|s| {
                let influence_score = engagement_score(s.influence);
                let interest_score = engagement_score(s.interest);
                StakeholderPosition {
                    name: s.name.to_string(),
                    role: s.role.to_string(),
                    influence_score,
                    interest_score,
                    sentiment: s.sentiment.to_string(),
                    strategy: Self::strategy_for(influence_score, interest_score),
                }
            })
            .collect()
    }

    /// Mapped stakeholders that share a strategy, in input order.
    pub fn with_strategy(
        positions: &[StakeholderPosition],
        strategy: EngagementStrategy,
    ) -> Vec<&StakeholderPosition> {
        positions.iter().filter(|p| p.strategy == strategy).collect()
    }
}
