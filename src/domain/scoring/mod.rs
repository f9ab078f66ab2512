//! Scoring Tables - the single source of label-to-ordinal mappings.
//!
//! Every engine that turns a categorical selection into a number goes through
//! this module, so the Low/Medium/High mapping cannot drift between the
//! portfolio matrix, the priority ranking and the stakeholder map.
//!
//! Any label outside a table scores 0. That is a present-but-unscored
//! category, not an error.

mod tables;

pub use tables::{
    engagement_score, level_score, readiness_score, MAX_ENGAGEMENT_SCORE, MAX_LEVEL_SCORE,
    MAX_READINESS_SCORE, SCORING_TABLE_VERSION, UNSCORED,
};
