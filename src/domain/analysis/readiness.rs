//! Readiness Calculator - Organizational AI readiness from nine self-assessed dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scoring::{readiness_score, MAX_READINESS_SCORE};

/// Maximum attainable sum: nine dimensions at score 4.
pub const MAX_READINESS_TOTAL: u8 = 9 * MAX_READINESS_SCORE;

/// Percentage at or above which readiness is "High".
pub const HIGH_READINESS_THRESHOLD: f64 = 75.0;

/// Percentage at or above which readiness is "Medium".
pub const MEDIUM_READINESS_THRESHOLD: f64 = 50.0;

/// The nine capability dimensions, grouped as data, technical and organizational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessDimension {
    DataQuality,
    DataAvailability,
    DataGovernance,
    AiExpertise,
    Infrastructure,
    DevOps,
    LeadershipSupport,
    ChangeReadiness,
    BudgetAvailability,
}

impl ReadinessDimension {
    pub const ALL: [ReadinessDimension; 9] = [
        ReadinessDimension::DataQuality,
        ReadinessDimension::DataAvailability,
        ReadinessDimension::DataGovernance,
        ReadinessDimension::AiExpertise,
        ReadinessDimension::Infrastructure,
        ReadinessDimension::DevOps,
        ReadinessDimension::LeadershipSupport,
        ReadinessDimension::ChangeReadiness,
        ReadinessDimension::BudgetAvailability,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessDimension::DataQuality => "Data Quality",
            ReadinessDimension::DataAvailability => "Data Availability",
            ReadinessDimension::DataGovernance => "Data Governance",
            ReadinessDimension::AiExpertise => "AI/ML Expertise",
            ReadinessDimension::Infrastructure => "Technical Infrastructure",
            ReadinessDimension::DevOps => "MLOps Maturity",
            ReadinessDimension::LeadershipSupport => "Leadership Support",
            ReadinessDimension::ChangeReadiness => "Change Management",
            ReadinessDimension::BudgetAvailability => "Budget Availability",
        }
    }

    /// Answer labels offered for this dimension, weakest first.
    pub fn options(&self) -> [&'static str; 4] {
        match self {
            ReadinessDimension::DataQuality | ReadinessDimension::ChangeReadiness => {
                ["Poor", "Fair", "Good", "Excellent"]
            }
            ReadinessDimension::DataAvailability => ["Limited", "Partial", "Good", "Comprehensive"],
            ReadinessDimension::DataGovernance => ["None", "Basic", "Structured", "Advanced"],
            ReadinessDimension::AiExpertise | ReadinessDimension::DevOps => {
                ["None", "Basic", "Intermediate", "Advanced"]
            }
            ReadinessDimension::Infrastructure => ["Legacy", "Hybrid", "Modern", "Cloud-native"],
            ReadinessDimension::LeadershipSupport => ["Low", "Medium", "High", "Very High"],
            ReadinessDimension::BudgetAvailability => ["Limited", "Moderate", "Good", "Generous"],
        }
    }
}

/// Raw answers to the capability questionnaire, one label per dimension.
///
/// Missing answers are empty strings and score 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessSelections {
    pub data_quality: String,
    pub data_availability: String,
    pub data_governance: String,
    pub ai_expertise: String,
    pub infrastructure: String,
    pub dev_ops: String,
    pub leadership_support: String,
    pub change_readiness: String,
    pub budget_availability: String,
}

impl ReadinessSelections {
    /// Returns a copy with the given dimension answered.
    pub fn with(mut self, dimension: ReadinessDimension, label: impl Into<String>) -> Self {
        *self.slot_mut(dimension) = label.into();
        self
    }

    /// Returns the answer recorded for a dimension.
    pub fn get(&self, dimension: ReadinessDimension) -> &str {
        match dimension {
            ReadinessDimension::DataQuality => &self.data_quality,
            ReadinessDimension::DataAvailability => &self.data_availability,
            ReadinessDimension::DataGovernance => &self.data_governance,
            ReadinessDimension::AiExpertise => &self.ai_expertise,
            ReadinessDimension::Infrastructure => &self.infrastructure,
            ReadinessDimension::DevOps => &self.dev_ops,
            ReadinessDimension::LeadershipSupport => &self.leadership_support,
            ReadinessDimension::ChangeReadiness => &self.change_readiness,
            ReadinessDimension::BudgetAvailability => &self.budget_availability,
        }
    }

    fn slot_mut(&mut self, dimension: ReadinessDimension) -> &mut String {
        match dimension {
            ReadinessDimension::DataQuality => &mut self.data_quality,
            ReadinessDimension::DataAvailability => &mut self.data_availability,
            ReadinessDimension::DataGovernance => &mut self.data_governance,
            ReadinessDimension::AiExpertise => &mut self.ai_expertise,
            ReadinessDimension::Infrastructure => &mut self.infrastructure,
            ReadinessDimension::DevOps => &mut self.dev_ops,
            ReadinessDimension::LeadershipSupport => &mut self.leadership_support,
            ReadinessDimension::ChangeReadiness => &mut self.change_readiness,
            ReadinessDimension::BudgetAvailability => &mut self.budget_availability,
        }
    }
}

/// Qualitative readiness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessTier {
    High,
    Medium,
    Low,
}

impl ReadinessTier {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessTier::High => "High readiness",
            ReadinessTier::Medium => "Medium readiness",
            ReadinessTier::Low => "Low readiness",
        }
    }

    /// Returns the recommended posture for this tier.
    pub fn guidance(&self) -> &'static str {
        match self {
            ReadinessTier::High => "Ready for complex AI initiatives",
            ReadinessTier::Medium => "Start with focused pilots",
            ReadinessTier::Low => "Foundation building needed",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.guidance())
    }
}

/// Score of a single dimension, for radar-style breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: ReadinessDimension,
    pub selection: String,
    pub score: u8,
}

/// Result of a readiness assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    /// Sum of the nine ordinal scores (0-36).
    pub total_score: u8,
    /// total_score / 36 × 100.
    pub percentage: f64,
    pub tier: ReadinessTier,
    /// One entry per dimension in questionnaire order.
    pub dimension_scores: Vec<DimensionScore>,
}

/// Readiness scoring functions.
pub struct ReadinessCalculator;

impl ReadinessCalculator {
    /// Scores a completed (or partially completed) capability questionnaire.
    ///
    /// # Edge Cases
    /// - Unanswered or unknown selections score 0
    /// - All selections at maximum: exactly 100%
    pub fn assess(selections: &ReadinessSelections) -> ReadinessAssessment {
        let dimension_scores: Vec<DimensionScore> = ReadinessDimension::ALL
            .iter()
            .map(|dim| {
                let selection = selections.get(*dim);
                DimensionScore {
                    dimension: *dim,
                    selection: selection.to_string(),
                    score: readiness_score(selection),
                }
            })
            .collect();

        let total_score: u8 = dimension_scores.iter().map(|d| d.score).sum();
        let percentage = Self::percentage_for(total_score);

        ReadinessAssessment {
            total_score,
            percentage,
            tier: Self::tier_for(percentage),
            dimension_scores,
        }
    }

    /// Converts a raw score sum into a 0-100 percentage.
    pub fn percentage_for(total_score: u8) -> f64 {
        f64::from(total_score) / f64::from(MAX_READINESS_TOTAL) * 100.0
    }

    /// Maps a percentage onto its tier.
    pub fn tier_for(percentage: f64) -> ReadinessTier {
        if percentage >= HIGH_READINESS_THRESHOLD {
            ReadinessTier::High
        } else if percentage >= MEDIUM_READINESS_THRESHOLD {
            ReadinessTier::Medium
        } else {
            ReadinessTier::Low
        }
    }
}
