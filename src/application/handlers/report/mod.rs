//! Report handlers.

mod errors;
mod export_report;
mod load_report;

pub use errors::ReportHandlerError;
pub use export_report::{ExportReportCommand, ExportReportHandler, ExportReportResult};
pub use load_report::{ListReportsHandler, LoadReportHandler, LoadReportQuery};
