//! Capability assessment record.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ReadinessCalculator, ReadinessSelections, ReadinessTier};
use crate::domain::foundation::Timestamp;

/// The saved outcome of the capability questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityAssessment {
    /// Readiness percentage (0-100).
    pub readiness_score: f64,
    pub tier: ReadinessTier,
    pub selections: ReadinessSelections,
    pub assessed_at: Timestamp,
}

impl CapabilityAssessment {
    /// Scores the selections and stamps the assessment.
    pub fn from_selections(selections: ReadinessSelections) -> Self {
        let result = ReadinessCalculator::assess(&selections);
        Self {
            readiness_score: result.percentage,
            tier: result.tier,
            selections,
            assessed_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ReadinessDimension;

    #[test]
    fn stores_score_and_tier() {
        let selections = ReadinessDimension::ALL
            .iter()
            .fold(ReadinessSelections::default(), |acc, d| acc.with(*d, d.options()[3]));
        let assessment = CapabilityAssessment::from_selections(selections.clone());
        assert_eq!(assessment.readiness_score, 100.0);
        assert_eq!(assessment.tier, ReadinessTier::High);
        assert_eq!(assessment.selections, selections);
    }

    #[test]
    fn empty_selections_score_zero() {
        let assessment = CapabilityAssessment::from_selections(ReadinessSelections::default());
        assert_eq!(assessment.readiness_score, 0.0);
        assert_eq!(assessment.tier, ReadinessTier::Low);
    }
}
