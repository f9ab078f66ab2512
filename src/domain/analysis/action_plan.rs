//! Action Planner - Portfolio summary, ranked roadmap and quarterly focus.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{PortfolioAnalyzer, PortfolioItem, Quadrant};
use crate::domain::foundation::{Timeline, Timestamp};

/// Days between the start dates of consecutive roadmap entries.
pub const ROADMAP_STAGGER_DAYS: i64 = 30;

/// Number of quarters the focus plan covers.
pub const FOCUS_QUARTERS: usize = 4;

/// Impact label counted as high impact in the summary.
pub const HIGH_IMPACT_LABEL: &str = "High";

/// Placeholder owner for initiatives without one.
pub const UNASSIGNED_OWNER: &str = "TBD";

/// Metrics tracked across the whole portfolio.
pub const PORTFOLIO_METRICS: [&str; 5] = [
    "Number of initiatives in production",
    "Cumulative ROI across all initiatives",
    "Time to market for new initiatives",
    "Stakeholder satisfaction scores",
    "AI capability maturity score",
];

const FIRST_QUARTER_ACTIONS: [&str; 3] = [
    "Finalize data requirements and access",
    "Assemble project team",
    "Set up development environment",
];

const SECOND_QUARTER_ACTIONS: [&str; 3] = [
    "Complete pilot development",
    "Conduct initial testing",
    "Gather stakeholder feedback",
];

const LATER_QUARTER_ACTIONS: [&str; 3] = [
    "Begin requirements gathering",
    "Identify data sources",
    "Plan resource allocation",
];

/// The fields of an initiative the planner reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanItem<'a> {
    pub name: &'a str,
    pub business_problem: &'a str,
    pub owner: &'a str,
    pub phase1: &'a str,
    pub phase2: &'a str,
    pub primary_metric: &'a str,
    pub complexity: &'a str,
    pub business_impact: &'a str,
    pub timeline: Timeline,
    pub investment_required: f64,
    pub expected_roi: f64,
}

impl<'a> PlanItem<'a> {
    pub fn portfolio_item(&self) -> PortfolioItem<'a> {
        PortfolioItem {
            name: self.name,
            complexity: self.complexity,
            business_impact: self.business_impact,
            expected_roi: self.expected_roi,
        }
    }
}

/// Headline figures for the whole portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_initiatives: usize,
    pub high_impact_initiatives: usize,
    pub total_investment: f64,
    /// Mean expected ROI in percent; 0 for an empty portfolio.
    pub average_roi: f64,
}

/// One initiative on the ranked roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    /// Zero-based position in the ranking.
    pub rank: usize,
    /// Index of the initiative in the planned slice.
    pub index: usize,
    pub name: String,
    pub quadrant: Quadrant,
    pub priority_score: f64,
    pub business_impact: String,
    pub investment_required: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// A calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarQuarter {
    pub year: i32,
    /// 1-4.
    pub quarter: u32,
}

impl CalendarQuarter {
    pub fn containing(timestamp: &Timestamp) -> Self {
        Self {
            year: timestamp.year(),
            quarter: timestamp.quarter(),
        }
    }

    pub fn next(&self) -> Self {
        if self.quarter >= 4 {
            Self {
                year: self.year + 1,
                quarter: 1,
            }
        } else {
            Self {
                year: self.year,
                quarter: self.quarter + 1,
            }
        }
    }
}

impl fmt::Display for CalendarQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

/// The initiative a quarter concentrates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterFocus {
    pub quarter: CalendarQuarter,
    pub initiative: String,
    pub business_problem: String,
    pub owner: String,
    pub phase1: Option<String>,
    pub phase2: Option<String>,
    pub key_actions: Vec<String>,
}

/// Everything the action-plan step derives from the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub summary: PortfolioSummary,
    pub roadmap: Vec<RoadmapEntry>,
    pub quarterly_focus: Vec<QuarterFocus>,
    pub portfolio_metrics: Vec<String>,
    pub initiative_metrics: Vec<String>,
}

pub struct ActionPlanner;

impl ActionPlanner {
    /// Derives the full plan relative to `reference`.
    pub fn plan(items: &[PlanItem<'_>], reference: Timestamp) -> ActionPlan {
        let roadmap = Self::roadmap(items, reference);
        let quarterly_focus = Self::quarterly_focus(items, &roadmap, reference);

        ActionPlan {
            summary: Self::summarize(items),
            roadmap,
            quarterly_focus,
            portfolio_metrics: PORTFOLIO_METRICS.iter().map(|m| m.to_string()).collect(),
            initiative_metrics: Self::initiative_metrics(items),
        }
    }

    pub fn summarize(items: &[PlanItem<'_>]) -> PortfolioSummary {
        let total_initiatives = items.len();
        let average_roi = if total_initiatives == 0 {
            0.0
        } else {
            items.iter().map(|i| i.expected_roi).sum::<f64>() / total_initiatives as f64
        };

        PortfolioSummary {
            total_initiatives,
            high_impact_initiatives: items
                .iter()
                .filter(|i| i.business_impact == HIGH_IMPACT_LABEL)
                .count(),
            total_investment: items.iter().map(|i| i.investment_required).sum(),
            average_roi,
        }
    }

    /// Every initiative in priority order with staggered start dates.
    pub fn roadmap(items: &[PlanItem<'_>], reference: Timestamp) -> Vec<RoadmapEntry> {
        let portfolio: Vec<PortfolioItem<'_>> = items.iter().map(PlanItem::portfolio_item).collect();

        PortfolioAnalyzer::rank(&portfolio)
            .into_iter()
            .enumerate()
            .map(|(rank, position)| {
                let item = &items[position.index];
                let start_date = reference.add_days(rank as i64 * ROADMAP_STAGGER_DAYS);
                RoadmapEntry {
                    rank,
                    index: position.index,
                    name: item.name.to_string(),
                    quadrant: position.quadrant,
                    priority_score: position.priority_score,
                    business_impact: item.business_impact.to_string(),
                    investment_required: item.investment_required,
                    start_date,
                    end_date: start_date.add_planning_months(item.timeline.planned_months()),
                }
            })
            .collect()
    }

    /// Assigns the top-ranked initiatives to the quarter containing
    /// `reference` and the quarters after it.
    pub fn quarterly_focus(
        items: &[PlanItem<'_>],
        roadmap: &[RoadmapEntry],
        reference: Timestamp,
    ) -> Vec<QuarterFocus> {
        let mut quarter = CalendarQuarter::containing(&reference);
        let mut focus = Vec::new();

        for (position, entry) in roadmap.iter().take(FOCUS_QUARTERS).enumerate() {
            let Some(item) = items.get(entry.index) else {
                continue;
            };
            focus.push(QuarterFocus {
                quarter,
                initiative: item.name.to_string(),
                business_problem: item.business_problem.to_string(),
                owner: non_empty(item.owner).unwrap_or(UNASSIGNED_OWNER).to_string(),
                phase1: non_empty(item.phase1).map(str::to_string),
                phase2: non_empty(item.phase2).map(str::to_string),
                key_actions: Self::key_actions(position)
                    .iter()
                    .map(|a| a.to_string())
                    .collect(),
            });
            quarter = quarter.next();
        }

        focus
    }

    /// Fixed actions for the initiative at a ranking position.
    pub fn key_actions(position: usize) -> &'static [&'static str] {
        match position {
            0 => &FIRST_QUARTER_ACTIONS,
            1 => &SECOND_QUARTER_ACTIONS,
            _ => &LATER_QUARTER_ACTIONS,
        }
    }

    /// Distinct non-empty primary metrics in first-seen order.
    pub fn initiative_metrics(items: &[PlanItem<'_>]) -> Vec<String> {
        let mut seen = HashSet::new();
        items
            .iter()
            .filter_map(|i| non_empty(i.primary_metric))
            .filter(|m| seen.insert(*m))
            .map(str::to_string)
            .collect()
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
