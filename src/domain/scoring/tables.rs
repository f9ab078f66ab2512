use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Bumped whenever any mapping below changes; stamped into exported reports.
pub const SCORING_TABLE_VERSION: u32 = 2;

/// Score for a label that no table knows.
pub const UNSCORED: u8 = 0;

pub const MAX_READINESS_SCORE: u8 = 4;
pub const MAX_LEVEL_SCORE: u8 = 3;
pub const MAX_ENGAGEMENT_SCORE: u8 = 4;

/// Capability-assessment answers. Different dimensions use different
/// vocabularies, but all of them land on the same 1-4 scale. "Hybrid" is
/// offered for infrastructure but has no entry, so it scores 0.
static READINESS_SCORES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("Poor", 1),
        ("None", 1),
        ("Legacy", 1),
        ("Low", 1),
        ("Limited", 1),
        ("Fair", 2),
        ("Basic", 2),
        ("Medium", 2),
        ("Partial", 2),
        ("Moderate", 2),
        ("Good", 3),
        ("Intermediate", 3),
        ("High", 3),
        ("Structured", 3),
        ("Excellent", 4),
        ("Advanced", 4),
        ("Very High", 4),
        ("Comprehensive", 4),
        ("Modern", 4),
        ("Cloud-native", 4),
        ("Generous", 4),
    ])
});

static LEVEL_SCORES: Lazy<HashMap<&'static str, u8>> =
    Lazy::new(|| HashMap::from([("Low", 1), ("Medium", 2), ("High", 3)]));

static ENGAGEMENT_SCORES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([("Low", 1), ("Medium", 2), ("High", 3), ("Very High", 4)])
});

/// Ordinal score (1-4) of a capability-assessment answer.
pub fn readiness_score(label: &str) -> u8 {
    READINESS_SCORES.get(label).copied().unwrap_or(UNSCORED)
}

/// Ordinal score (1-3) of a Low/Medium/High label.
pub fn level_score(label: &str) -> u8 {
    LEVEL_SCORES.get(label).copied().unwrap_or(UNSCORED)
}

/// Ordinal score (1-4) of a Low..Very High engagement label.
pub fn engagement_score(label: &str) -> u8 {
    ENGAGEMENT_SCORES.get(label).copied().unwrap_or(UNSCORED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_vocabularies_share_one_scale() {
        assert_eq!(readiness_score("Poor"), 1);
        assert_eq!(readiness_score("Partial"), 2);
        assert_eq!(readiness_score("Structured"), 3);
        assert_eq!(readiness_score("Cloud-native"), 4);
        assert_eq!(readiness_score("Generous"), 4);
    }

    #[test]
    fn hybrid_infrastructure_is_unscored() {
        assert_eq!(readiness_score("Hybrid"), UNSCORED);
    }

    #[test]
    fn unknown_labels_score_zero() {
        assert_eq!(readiness_score("Stellar"), UNSCORED);
        assert_eq!(level_score("Extreme"), UNSCORED);
        assert_eq!(engagement_score(""), UNSCORED);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(level_score("high"), UNSCORED);
    }

    #[test]
    fn level_table_is_one_to_three() {
        assert_eq!(level_score("Low"), 1);
        assert_eq!(level_score("Medium"), 2);
        assert_eq!(level_score("High"), MAX_LEVEL_SCORE);
    }

    #[test]
    fn engagement_table_is_one_to_four() {
        assert_eq!(engagement_score("Low"), 1);
        assert_eq!(engagement_score("Very High"), MAX_ENGAGEMENT_SCORE);
    }

    #[test]
    fn no_readiness_score_exceeds_maximum() {
        assert!(READINESS_SCORES.values().all(|s| (1..=MAX_READINESS_SCORE).contains(s)));
    }
}
