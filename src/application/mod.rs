//! Application layer - Seeds and report handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod seed;

pub use handlers::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ListReportsHandler,
    LoadReportHandler, LoadReportQuery, ReportHandlerError,
};
pub use seed::{PlanningSeed, SeedError, SeedInitiative, SeedStakeholder};
