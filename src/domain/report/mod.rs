//! Report Module - The exportable action-plan snapshot.
//!
//! A report freezes the ranked portfolio, its headline metrics and the
//! stakeholder list at export time. It is written once and read back only
//! for inspection; it never repopulates a planning session.

mod action_plan_report;
mod errors;

pub use action_plan_report::{
    ActionPlanReport, ReportInitiative, ReportStakeholder, REPORT_FILE_EXTENSION,
    REPORT_FILE_PREFIX,
};
pub use errors::ReportError;
