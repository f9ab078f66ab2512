//! Categorical selections shared by initiatives and stakeholders.
//!
//! Each enum serializes as its display label (`"Very High"`, `"3-6 months"`)
//! so reports read the same way the questionnaire does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Three-step rating used for complexity, business impact and risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.label() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("level", format!("unknown label '{}'", s)))
    }
}

/// Four-step rating used for stakeholder influence and interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementLevel {
    Low,
    #[default]
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl EngagementLevel {
    pub const ALL: [EngagementLevel; 4] = [
        EngagementLevel::Low,
        EngagementLevel::Medium,
        EngagementLevel::High,
        EngagementLevel::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "Low",
            EngagementLevel::Medium => "Medium",
            EngagementLevel::High => "High",
            EngagementLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EngagementLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngagementLevel::ALL
            .into_iter()
            .find(|l| l.label() == s.trim())
            .ok_or_else(|| {
                ValidationError::invalid_format("engagement_level", format!("unknown label '{}'", s))
            })
    }
}

/// A stakeholder's current attitude toward the AI program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Skeptical,
    #[default]
    Neutral,
    Supportive,
    Champion,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Skeptical,
        Sentiment::Neutral,
        Sentiment::Supportive,
        Sentiment::Champion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Skeptical => "Skeptical",
            Sentiment::Neutral => "Neutral",
            Sentiment::Supportive => "Supportive",
            Sentiment::Champion => "Champion",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sentiment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|l| l.label() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("sentiment", format!("unknown label '{}'", s)))
    }
}

/// Expected delivery window of an initiative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[default]
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "12+ months")]
    OverTwelveMonths,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [
        Timeline::ThreeToSixMonths,
        Timeline::SixToTwelveMonths,
        Timeline::OverTwelveMonths,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixToTwelveMonths => "6-12 months",
            Timeline::OverTwelveMonths => "12+ months",
        }
    }

    /// Planned duration in months used when laying out the roadmap.
    pub fn planned_months(&self) -> i64 {
        match self {
            Timeline::ThreeToSixMonths => 4,
            Timeline::SixToTwelveMonths => 9,
            Timeline::OverTwelveMonths => 18,
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeline {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeline::ALL
            .into_iter()
            .find(|l| l.label() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("timeline", format!("unknown label '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_labels() {
        assert_eq!("High".parse::<Level>().unwrap(), Level::High);
        assert_eq!(" Low ".parse::<Level>().unwrap(), Level::Low);
        assert!("Extreme".parse::<Level>().is_err());
    }

    #[test]
    fn engagement_level_uses_spaced_label() {
        assert_eq!("Very High".parse::<EngagementLevel>().unwrap(), EngagementLevel::VeryHigh);
        let json = serde_json::to_string(&EngagementLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
    }

    #[test]
    fn sentiment_round_trips_through_label() {
        for s in Sentiment::ALL {
            assert_eq!(s.label().parse::<Sentiment>().unwrap(), s);
        }
    }

    #[test]
    fn timeline_planned_months() {
        assert_eq!(Timeline::ThreeToSixMonths.planned_months(), 4);
        assert_eq!(Timeline::SixToTwelveMonths.planned_months(), 9);
        assert_eq!(Timeline::OverTwelveMonths.planned_months(), 18);
    }

    #[test]
    fn timeline_serializes_as_label() {
        let json = serde_json::to_string(&Timeline::OverTwelveMonths).unwrap();
        assert_eq!(json, "\"12+ months\"");
        let t: Timeline = serde_json::from_str("\"3-6 months\"").unwrap();
        assert_eq!(t, Timeline::ThreeToSixMonths);
    }

    #[test]
    fn defaults_are_middle_options() {
        assert_eq!(Level::default(), Level::Medium);
        assert_eq!(Timeline::default(), Timeline::SixToTwelveMonths);
    }
}
