//! Analysis Module - Pure domain services for strategy metrics.
//!
//! This module contains stateless functions that turn questionnaire answers
//! into derived metrics.
//!
//! # Components
//!
//! - `ReadinessCalculator` - 9-dimension capability score, percentage and tier
//! - `ImpactCalculator` - Totals, ROI and payback for one initiative
//! - `ScenarioAnalyzer` - Multi-year NPV/ROI/payback for three scenarios
//! - `RiskAdjustment` - Suggested benefit reduction per risk factor
//! - `PortfolioAnalyzer` - Quadrants, priority scores and stable ranking
//! - `StakeholderMapper` - Influence/interest engagement strategies
//! - `ActionPlanner` - Portfolio summary, roadmap and quarterly focus
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. They take borrowed snapshots of the
//! planning session and return new values; nothing here is cached, so every
//! call recomputes from its inputs.

mod action_plan;
mod impact;
mod payback;
mod portfolio;
mod readiness;
mod risk;
mod scenario;
mod stakeholder_map;

pub use action_plan::{
    ActionPlan, ActionPlanner, CalendarQuarter, PlanItem, PortfolioSummary, QuarterFocus,
    RoadmapEntry, FOCUS_QUARTERS, HIGH_IMPACT_LABEL, PORTFOLIO_METRICS, ROADMAP_STAGGER_DAYS,
    UNASSIGNED_OWNER,
};
pub use impact::{ImpactCalculator, ImpactInputs, ImpactSummary};
pub use payback::{Payback, NOT_APPLICABLE_LABEL};
pub use portfolio::{
    PortfolioAnalyzer, PortfolioItem, PortfolioRecommendations, Quadrant, RankedPosition,
    QUADRANT_MIDPOINT,
};
pub use readiness::{
    DimensionScore, ReadinessAssessment, ReadinessCalculator, ReadinessDimension,
    ReadinessSelections, ReadinessTier, HIGH_READINESS_THRESHOLD, MAX_READINESS_TOTAL,
    MEDIUM_READINESS_THRESHOLD,
};
pub use risk::{RiskAdjustment, RiskFactor, REDUCTION_PER_FACTOR_PERCENT};
pub use scenario::{
    AnalysisHorizon, ScenarioAnalyzer, ScenarioInputs, ScenarioKind, ScenarioResult,
    YearCashFlow, DISCOUNT_RATE,
};
pub use stakeholder_map::{
    EngagementStrategy, StakeholderItem, StakeholderMapper, StakeholderPosition,
};
