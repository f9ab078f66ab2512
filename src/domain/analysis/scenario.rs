//! Scenario Analyzer - Multi-year NPV, ROI and payback across three benefit scenarios.
//!
//! Each scenario scales the base annual benefit, ramps it up over the
//! implementation period, subtracts operating cost and discounts the result
//! at a fixed yearly rate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Payback;
use crate::domain::foundation::{Money, ValidationError};

/// Yearly discount rate applied to every net cash flow.
pub const DISCOUNT_RATE: f64 = 0.10;

/// Share of the pro-rated benefit realised while still implementing.
pub const RAMP_UP_SHARE: f64 = 0.5;

pub const MIN_IMPLEMENTATION_MONTHS: u32 = 1;
pub const MAX_IMPLEMENTATION_MONTHS: u32 = 36;

pub const CONSERVATIVE_FACTOR_MIN: f64 = 0.5;
pub const CONSERVATIVE_FACTOR_MAX: f64 = 0.9;
pub const OPTIMISTIC_FACTOR_MIN: f64 = 1.1;
pub const OPTIMISTIC_FACTOR_MAX: f64 = 2.0;

/// Number of years the cash flows are projected over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AnalysisHorizon {
    OneYear,
    TwoYears,
    #[default]
    ThreeYears,
    FiveYears,
}

impl AnalysisHorizon {
    pub const ALL: [AnalysisHorizon; 4] = [
        AnalysisHorizon::OneYear,
        AnalysisHorizon::TwoYears,
        AnalysisHorizon::ThreeYears,
        AnalysisHorizon::FiveYears,
    ];

    pub fn years(&self) -> u32 {
        match self {
            AnalysisHorizon::OneYear => 1,
            AnalysisHorizon::TwoYears => 2,
            AnalysisHorizon::ThreeYears => 3,
            AnalysisHorizon::FiveYears => 5,
        }
    }
}

impl TryFrom<u32> for AnalysisHorizon {
    type Error = ValidationError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        AnalysisHorizon::ALL
            .into_iter()
            .find(|h| h.years() == years)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "horizon",
                    format!("{} years is not one of 1, 2, 3 or 5", years),
                )
            })
    }
}

impl From<AnalysisHorizon> for u32 {
    fn from(horizon: AnalysisHorizon) -> Self {
        horizon.years()
    }
}

/// Inputs of a scenario analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub initial_investment: Money,
    pub annual_operating_cost: Money,
    pub implementation_months: u32,
    pub cost_reduction: Money,
    pub revenue_increase: Money,
    pub productivity_gain: Money,
    pub conservative_factor: f64,
    pub optimistic_factor: f64,
    pub horizon: AnalysisHorizon,
}

impl ScenarioInputs {
    /// Checks the month and factor ranges; amounts are validated by `Money`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_IMPLEMENTATION_MONTHS..=MAX_IMPLEMENTATION_MONTHS)
            .contains(&self.implementation_months)
        {
            return Err(ValidationError::out_of_range(
                "implementation_months",
                MIN_IMPLEMENTATION_MONTHS as f64,
                MAX_IMPLEMENTATION_MONTHS as f64,
                self.implementation_months as f64,
            ));
        }
        check_factor(
            "conservative_factor",
            self.conservative_factor,
            CONSERVATIVE_FACTOR_MIN,
            CONSERVATIVE_FACTOR_MAX,
        )?;
        check_factor(
            "optimistic_factor",
            self.optimistic_factor,
            OPTIMISTIC_FACTOR_MIN,
            OPTIMISTIC_FACTOR_MAX,
        )
    }

    /// Sum of the three annual benefit components.
    pub fn base_annual_benefit(&self) -> Money {
        self.cost_reduction + self.revenue_increase + self.productivity_gain
    }

    /// Whole years the implementation period spans, rounded up.
    pub fn ramp_up_years(&self) -> u32 {
        self.implementation_months.div_ceil(12)
    }
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            initial_investment: Money::ZERO,
            annual_operating_cost: Money::ZERO,
            implementation_months: 6,
            cost_reduction: Money::ZERO,
            revenue_increase: Money::ZERO,
            productivity_gain: Money::ZERO,
            conservative_factor: 0.7,
            optimistic_factor: 1.3,
            horizon: AnalysisHorizon::default(),
        }
    }
}

fn check_factor(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "factor must be finite"));
    }
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(())
}

/// The three benefit scenarios, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    Conservative,
    #[serde(rename = "Base Case")]
    BaseCase,
    Optimistic,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::BaseCase,
        ScenarioKind::Optimistic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::BaseCase => "Base Case",
            ScenarioKind::Optimistic => "Optimistic",
        }
    }

    /// Multiplier applied to the base annual benefit.
    pub fn factor(&self, inputs: &ScenarioInputs) -> f64 {
        match self {
            ScenarioKind::Conservative => inputs.conservative_factor,
            ScenarioKind::BaseCase => 1.0,
            ScenarioKind::Optimistic => inputs.optimistic_factor,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One projected year of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearCashFlow {
    pub year: u32,
    pub benefit: f64,
    pub net_cash_flow: f64,
    pub discounted_cash_flow: f64,
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: ScenarioKind,
    pub annual_benefit: f64,
    pub npv: f64,
    pub roi_percent: f64,
    pub payback: Payback,
    pub cash_flows: Vec<YearCashFlow>,
}

impl ScenarioResult {
    pub fn name(&self) -> &'static str {
        self.scenario.label()
    }
}

/// Multi-year scenario projection.
pub struct ScenarioAnalyzer;

impl ScenarioAnalyzer {
    /// Runs all three scenarios in the order Conservative, Base Case, Optimistic.
    ///
    /// # Errors
    ///
    /// Returns the first range violation found in `inputs`; nothing is
    /// computed in that case.
    pub fn analyze(inputs: &ScenarioInputs) -> Result<[ScenarioResult; 3], ValidationError> {
        inputs.validate()?;
        Ok(ScenarioKind::ALL.map(|kind| Self::project(inputs, kind)))
    }

    fn project(inputs: &ScenarioInputs, scenario: ScenarioKind) -> ScenarioResult {
        let annual_benefit = inputs.base_annual_benefit().amount() * scenario.factor(inputs);
        let operating_cost = inputs.annual_operating_cost.amount();
        let investment = inputs.initial_investment.amount();

        let cash_flows: Vec<YearCashFlow> = (1..=inputs.horizon.years())
            .map(|year| {
                let benefit = Self::benefit_in_year(inputs, annual_benefit, year);
                let net_cash_flow = benefit - operating_cost;
                YearCashFlow {
                    year,
                    benefit,
                    net_cash_flow,
                    discounted_cash_flow: Self::discount(net_cash_flow, year),
                }
            })
            .collect();

        let npv = -investment + cash_flows.iter().map(|c| c.discounted_cash_flow).sum::<f64>();
        let roi_percent = if investment > 0.0 {
            npv / investment * 100.0
        } else {
            0.0
        };

        ScenarioResult {
            scenario,
            annual_benefit,
            npv,
            roi_percent,
            payback: Payback::from_ratio(investment, annual_benefit - operating_cost),
            cash_flows,
        }
    }

    /// Benefit realised in `year`, pro-rated and halved while ramping up.
    fn benefit_in_year(inputs: &ScenarioInputs, annual_benefit: f64, year: u32) -> f64 {
        if year <= inputs.ramp_up_years() {
            let implementation_years = inputs.implementation_months as f64 / 12.0;
            annual_benefit * (year as f64 / implementation_years) * RAMP_UP_SHARE
        } else {
            annual_benefit
        }
    }

    fn discount(amount: f64, year: u32) -> f64 {
        amount / (1.0 + DISCOUNT_RATE).powi(year as i32)
    }
}
