//! LoadReportHandler and ListReportsHandler - Read stored reports back.

use std::sync::Arc;
use tracing::debug;

use super::ReportHandlerError;
use crate::domain::foundation::ReportId;
use crate::domain::report::ActionPlanReport;
use crate::ports::{FileInfo, ReportFileStorage};

/// Query for one stored report.
#[derive(Debug, Clone, Copy)]
pub struct LoadReportQuery {
    pub report_id: ReportId,
}

/// Handler for re-parsing a stored report.
pub struct LoadReportHandler {
    storage: Arc<dyn ReportFileStorage>,
}

impl LoadReportHandler {
    pub fn new(storage: Arc<dyn ReportFileStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: LoadReportQuery) -> Result<ActionPlanReport, ReportHandlerError> {
        let json = self.storage.read(query.report_id).await?;
        let report = ActionPlanReport::from_json(&json)?;
        debug!(
            report_id = %report.report_id,
            initiatives = report.total_initiatives,
            "Report loaded"
        );
        Ok(report)
    }
}

/// Handler for listing stored reports, newest first.
pub struct ListReportsHandler {
    storage: Arc<dyn ReportFileStorage>,
}

impl ListReportsHandler {
    pub fn new(storage: Arc<dyn ReportFileStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self) -> Result<Vec<FileInfo>, ReportHandlerError> {
        Ok(self.storage.list().await?)
    }
}
