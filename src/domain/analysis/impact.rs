//! Impact Calculator - Benefits, investment, ROI and payback for one initiative.

use serde::{Deserialize, Serialize};

use super::Payback;
use crate::domain::foundation::{Money, ValidationError};

/// Financial estimates captured during impact analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactInputs {
    pub cost_savings: Money,
    pub revenue_increase: Money,
    pub risk_reduction: Money,
    pub technology_cost: Money,
    pub personnel_cost: Money,
    pub infrastructure_cost: Money,
}

impl ImpactInputs {
    /// Builds inputs from raw amounts, rejecting negative or non-finite values.
    pub fn new(
        cost_savings: f64,
        revenue_increase: f64,
        risk_reduction: f64,
        technology_cost: f64,
        personnel_cost: f64,
        infrastructure_cost: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            cost_savings: Money::try_for("cost_savings", cost_savings)?,
            revenue_increase: Money::try_for("revenue_increase", revenue_increase)?,
            risk_reduction: Money::try_for("risk_reduction", risk_reduction)?,
            technology_cost: Money::try_for("technology_cost", technology_cost)?,
            personnel_cost: Money::try_for("personnel_cost", personnel_cost)?,
            infrastructure_cost: Money::try_for("infrastructure_cost", infrastructure_cost)?,
        })
    }

    /// Sum of the three benefit amounts.
    pub fn total_benefits(&self) -> Money {
        self.cost_savings + self.revenue_increase + self.risk_reduction
    }

    /// Sum of the three cost amounts.
    pub fn total_investment(&self) -> Money {
        self.technology_cost + self.personnel_cost + self.infrastructure_cost
    }
}

/// Derived financial figures for one initiative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub total_benefits: Money,
    pub total_investment: Money,
    /// Return on investment in percent; may be negative.
    pub roi_percent: f64,
    pub payback: Payback,
}

/// Single-initiative financial functions.
pub struct ImpactCalculator;

impl ImpactCalculator {
    /// Computes totals, ROI and payback.
    ///
    /// # Edge Cases
    /// - Zero investment: ROI is 0 regardless of benefits
    /// - Zero benefits: payback is `NotApplicable`
    pub fn summarize(inputs: &ImpactInputs) -> ImpactSummary {
        let total_benefits = inputs.total_benefits();
        let total_investment = inputs.total_investment();

        ImpactSummary {
            total_benefits,
            total_investment,
            roi_percent: Self::roi_percent(total_benefits, total_investment),
            payback: Payback::from_ratio(total_investment.amount(), total_benefits.amount()),
        }
    }

    /// (benefits − investment) / investment × 100, or 0 without investment.
    pub fn roi_percent(total_benefits: Money, total_investment: Money) -> f64 {
        if total_investment.amount() > 0.0 {
            (total_benefits.amount() - total_investment.amount()) / total_investment.amount()
                * 100.0
        } else {
            0.0
        }
    }
}
