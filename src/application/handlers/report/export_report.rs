//! ExportReportHandler - Builds an action-plan report and stores it.

use std::sync::Arc;
use tracing::info;

use super::ReportHandlerError;
use crate::domain::foundation::Timestamp;
use crate::domain::planning::PlanningSession;
use crate::domain::report::ActionPlanReport;
use crate::ports::{FilePath, ReportFileStorage};

/// Command to export the current session.
#[derive(Debug, Clone, Copy)]
pub struct ExportReportCommand {
    pub generated_at: Timestamp,
    /// Start date of the first roadmap entry.
    pub roadmap_start: Timestamp,
}

impl ExportReportCommand {
    /// Export stamped now, with the roadmap starting now.
    pub fn now() -> Self {
        let now = Timestamp::now();
        Self {
            generated_at: now,
            roadmap_start: now,
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub report: ActionPlanReport,
    pub path: FilePath,
    pub checksum: String,
}

/// Handler for exporting reports.
pub struct ExportReportHandler {
    storage: Arc<dyn ReportFileStorage>,
}

impl ExportReportHandler {
    pub fn new(storage: Arc<dyn ReportFileStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        session: &PlanningSession,
        cmd: ExportReportCommand,
    ) -> Result<ExportReportResult, ReportHandlerError> {
        // 1. Snapshot the session
        let report = ActionPlanReport::build(session, cmd.generated_at, cmd.roadmap_start);
        let json = report.to_json()?;

        // 2. Persist
        let path = self
            .storage
            .write(report.report_id, &report.generated_at, &json)
            .await?;
        let checksum = self.storage.metadata(report.report_id).await?.checksum;

        info!(
            report_id = %report.report_id,
            session_id = %report.session_id,
            initiatives = report.total_initiatives,
            path = %path,
            "Action plan exported"
        );

        Ok(ExportReportResult {
            report,
            path,
            checksum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryReportFileStorage;
    use crate::domain::planning::InitiativeProfile;
    use crate::ports::StorageError;

    fn session() -> PlanningSession {
        let mut session = PlanningSession::new();
        session
            .add_initiative(InitiativeProfile::new("Chatbot", "Slow support"))
            .unwrap();
        session
    }

    #[tokio::test]
    async fn export_writes_report_json() {
        let storage = Arc::new(InMemoryReportFileStorage::new(1_000_000));
        let handler = ExportReportHandler::new(storage.clone());

        let result = handler
            .handle(&session(), ExportReportCommand::now())
            .await
            .unwrap();

        let stored = storage.read(result.report.report_id).await.unwrap();
        let parsed = ActionPlanReport::from_json(&stored).unwrap();
        assert_eq!(parsed.total_initiatives, 1);
        assert_eq!(result.checksum.len(), 64);
        assert_eq!(result.path.file_name(), Some(result.report.file_name()));
    }

    #[tokio::test]
    async fn export_surfaces_storage_errors() {
        let handler = ExportReportHandler::new(Arc::new(InMemoryReportFileStorage::new(10)));

        let err = handler
            .handle(&session(), ExportReportCommand::now())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReportHandlerError::Storage(StorageError::FileTooLarge { .. })
        ));
    }
}
