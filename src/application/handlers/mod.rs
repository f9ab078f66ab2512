//! Application handlers.

pub mod report;

pub use report::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, ListReportsHandler,
    LoadReportHandler, LoadReportQuery, ReportHandlerError,
};
