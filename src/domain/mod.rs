//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `scoring` - Versioned label-to-score lookup tables
//! - `analysis` - Pure metric engines (readiness, ROI, NPV scenarios, portfolio, roadmap)
//! - `planning` - The planning session record store
//! - `report` - The exportable action-plan report

pub mod analysis;
pub mod foundation;
pub mod planning;
pub mod report;
pub mod scoring;
