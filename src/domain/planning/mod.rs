//! Planning Module - The in-memory record store for one questionnaire run.
//!
//! `PlanningSession` owns goals, the business objective, initiatives,
//! stakeholders and the capability assessment. Records are created by add
//! actions, changed only by the explicit save actions and removed by remove
//! actions.

mod capability;
mod errors;
mod goal;
mod initiative;
mod session;
mod stakeholder;

pub use capability::CapabilityAssessment;
pub use errors::{PlanningError, RecordKind};
pub use goal::Goal;
pub use initiative::{ImpactAnalysis, Initiative, InitiativeProfile};
pub use session::PlanningSession;
pub use stakeholder::{Stakeholder, StakeholderProfile};
