//! Portfolio Analyzer - Complexity/impact quadrants and priority ranking.
//!
//! Labels are scored through the shared Low/Medium/High table, so an
//! unrecognised label scores 0 and sits on the low side of both axes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scoring::level_score;

/// Split point between the low and high half of each axis.
pub const QUADRANT_MIDPOINT: f64 = 2.5;

/// Priority bonus for low-effort, worthwhile initiatives.
pub const QUICK_WIN_BONUS: f64 = 100.0;

/// Priority bonus for demanding, worthwhile initiatives.
pub const STRATEGIC_BET_BONUS: f64 = 50.0;

/// Position on the complexity/impact matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    #[serde(rename = "Quick Win")]
    QuickWin,
    #[serde(rename = "Strategic Bet")]
    StrategicBet,
    #[serde(rename = "Fill-in")]
    FillIn,
    #[serde(rename = "Question Mark")]
    QuestionMark,
}

impl Quadrant {
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::QuickWin => "Quick Win",
            Quadrant::StrategicBet => "Strategic Bet",
            Quadrant::FillIn => "Fill-in",
            Quadrant::QuestionMark => "Question Mark",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fields of an initiative the portfolio engines read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioItem<'a> {
    pub name: &'a str,
    pub complexity: &'a str,
    pub business_impact: &'a str,
    pub expected_roi: f64,
}

/// An item's place in the priority ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedPosition {
    /// Index of the item in the slice that was ranked.
    pub index: usize,
    pub quadrant: Quadrant,
    pub priority_score: f64,
}

/// Initiative names grouped by recommended treatment, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecommendations {
    /// Priority 1.
    pub quick_wins: Vec<String>,
    /// Priority 2.
    pub strategic_bets: Vec<String>,
    pub review_needed: Vec<String>,
    /// Fill-ins.
    pub other: Vec<String>,
}

/// Quadrant classification and ranking over a portfolio.
pub struct PortfolioAnalyzer;

impl PortfolioAnalyzer {
    /// Classifies a complexity/impact label pair.
    pub fn quadrant(complexity: &str, business_impact: &str) -> Quadrant {
        Self::quadrant_for_scores(level_score(complexity), level_score(business_impact))
    }

    /// Classifies ordinal scores with a 2.5 split on both axes.
    pub fn quadrant_for_scores(complexity_score: u8, impact_score: u8) -> Quadrant {
        let complex = f64::from(complexity_score) >= QUADRANT_MIDPOINT;
        let impactful = f64::from(impact_score) >= QUADRANT_MIDPOINT;

        match (complex, impactful) {
            (false, true) => Quadrant::QuickWin,
            (true, true) => Quadrant::StrategicBet,
            (true, false) => Quadrant::QuestionMark,
            (false, false) => Quadrant::FillIn,
        }
    }

    /// Priority used to order the roadmap; higher comes first.
    pub fn priority_score(complexity: &str, business_impact: &str, expected_roi: f64) -> f64 {
        let complexity_score = level_score(complexity);
        let impact_score = level_score(business_impact);

        if complexity_score <= 2 && impact_score >= 2 {
            QUICK_WIN_BONUS + expected_roi
        } else if complexity_score >= 2 && impact_score >= 2 {
            STRATEGIC_BET_BONUS + expected_roi
        } else {
            expected_roi
        }
    }

    /// Ranks items by descending priority. Equal priorities keep input order.
    pub fn rank(items: &[PortfolioItem<'_>]) -> Vec<RankedPosition> {
        let mut ranked: Vec<RankedPosition> = items
            .iter()
            .enumerate()
            .map(|(index, item)| RankedPosition {
                index,
                quadrant: Self::quadrant(item.complexity, item.business_impact),
                priority_score: Self::priority_score(
                    item.complexity,
                    item.business_impact,
                    item.expected_roi,
                ),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        ranked
    }

    /// Groups item names by quadrant.
    pub fn recommendations(items: &[PortfolioItem<'_>]) -> PortfolioRecommendations {
        let mut recommendations = PortfolioRecommendations::default();

        for item in items {
            let bucket = match Self::quadrant(item.complexity, item.business_impact) {
                Quadrant::QuickWin => &mut recommendations.quick_wins,
                Quadrant::StrategicBet => &mut recommendations.strategic_bets,
                Quadrant::QuestionMark => &mut recommendations.review_needed,
                Quadrant::FillIn => &mut recommendations.other,
            };
            bucket.push(item.name.to_string());
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item<'a>(name: &'a str, complexity: &'a str, impact: &'a str, roi: f64) -> PortfolioItem<'a> {
        PortfolioItem {
            name,
            complexity,
            business_impact: impact,
            expected_roi: roi,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Quadrants
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn corner_cases_land_in_each_quadrant() {
        assert_eq!(PortfolioAnalyzer::quadrant("Low", "High"), Quadrant::QuickWin);
        assert_eq!(PortfolioAnalyzer::quadrant("High", "High"), Quadrant::StrategicBet);
        assert_eq!(PortfolioAnalyzer::quadrant("High", "Low"), Quadrant::QuestionMark);
        assert_eq!(PortfolioAnalyzer::quadrant("Low", "Low"), Quadrant::FillIn);
    }

    #[test]
    fn medium_sits_on_the_low_side_of_the_midpoint() {
        assert_eq!(PortfolioAnalyzer::quadrant("Medium", "High"), Quadrant::QuickWin);
        assert_eq!(PortfolioAnalyzer::quadrant("Medium", "Medium"), Quadrant::FillIn);
        assert_eq!(PortfolioAnalyzer::quadrant("High", "Medium"), Quadrant::QuestionMark);
    }

    #[test]
    fn unknown_labels_score_low() {
        assert_eq!(PortfolioAnalyzer::quadrant("Unknown", "High"), Quadrant::QuickWin);
        assert_eq!(PortfolioAnalyzer::quadrant("High", ""), Quadrant::QuestionMark);
    }

    #[test]
    fn quadrant_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Quadrant::FillIn).unwrap(), "\"Fill-in\"");
    }

    // ───────────────────────────────────────────────────────────────
    // Priority
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn priority_tiers() {
        assert_eq!(PortfolioAnalyzer::priority_score("Low", "High", 20.0), 120.0);
        assert_eq!(PortfolioAnalyzer::priority_score("Medium", "Medium", 0.0), 100.0);
        assert_eq!(PortfolioAnalyzer::priority_score("High", "High", 10.0), 60.0);
        assert_eq!(PortfolioAnalyzer::priority_score("High", "Low", 10.0), 10.0);
        assert_eq!(PortfolioAnalyzer::priority_score("Low", "Low", -5.0), -5.0);
    }

    #[test]
    fn rank_orders_by_descending_priority() {
        let items = [
            item("slow", "High", "Low", 80.0),
            item("bet", "High", "High", 10.0),
            item("quick", "Low", "High", 5.0),
        ];
        let order: Vec<usize> = PortfolioAnalyzer::rank(&items).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn rank_keeps_input_order_for_ties() {
        let items = [
            item("a", "High", "High", 0.0),
            item("b", "Low", "High", 0.0),
            item("c", "High", "High", 0.0),
            item("d", "Low", "High", 0.0),
        ];
        let order: Vec<usize> = PortfolioAnalyzer::rank(&items).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn rank_of_empty_portfolio_is_empty() {
        assert!(PortfolioAnalyzer::rank(&[]).is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Recommendations
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn recommendations_group_by_quadrant() {
        let items = [
            item("chatbot", "Low", "High", 0.0),
            item("forecasting", "High", "High", 0.0),
            item("tagging", "Low", "Low", 0.0),
            item("vision", "High", "Low", 0.0),
            item("triage", "Medium", "High", 0.0),
        ];
        let recs = PortfolioAnalyzer::recommendations(&items);
        assert_eq!(recs.quick_wins, vec!["chatbot", "triage"]);
        assert_eq!(recs.strategic_bets, vec!["forecasting"]);
        assert_eq!(recs.review_needed, vec!["vision"]);
        assert_eq!(recs.other, vec!["tagging"]);
    }

    proptest! {
        #[test]
        fn ranking_is_a_stable_descending_permutation(
            specs in proptest::collection::vec((0usize..4, 0usize..4, -2i32..3), 0..20)
        ) {
            const LABELS: [&str; 4] = ["Low", "Medium", "High", "?"];
            let items: Vec<PortfolioItem<'_>> = specs
                .iter()
                .map(|(c, i, roi)| item("x", LABELS[*c], LABELS[*i], f64::from(*roi) * 25.0))
                .collect();

            let ranked = PortfolioAnalyzer::rank(&items);
            prop_assert_eq!(ranked.len(), items.len());

            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority_score >= pair[1].priority_score);
                if pair[0].priority_score == pair[1].priority_score {
                    prop_assert!(pair[0].index < pair[1].index);
                }
            }
        }
    }
}
