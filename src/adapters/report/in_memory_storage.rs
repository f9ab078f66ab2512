//! In-Memory Report Storage Adapter
//!
//! Keeps exported reports in memory. Useful for testing.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::report::ActionPlanReport;
use crate::ports::{FileInfo, FileMetadata, FilePath, ReportFileStorage, StorageError};

#[derive(Debug, Clone)]
struct StoredReport {
    file_name: String,
    content: String,
    written_at: Timestamp,
}

/// In-memory storage for exported reports
#[derive(Debug, Clone)]
pub struct InMemoryReportFileStorage {
    reports: Arc<RwLock<HashMap<ReportId, StoredReport>>>,
    max_bytes: u64,
}

impl InMemoryReportFileStorage {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            reports: Arc::new(RwLock::new(HashMap::new())),
            max_bytes,
        }
    }

    /// Number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }

    fn missing(report_id: ReportId) -> StorageError {
        StorageError::not_found(format!("report {}", report_id))
    }
}

#[async_trait]
impl ReportFileStorage for InMemoryReportFileStorage {
    async fn write(
        &self,
        report_id: ReportId,
        generated_at: &Timestamp,
        content: &str,
    ) -> Result<FilePath, StorageError> {
        let size = content.len() as u64;
        if size > self.max_bytes {
            return Err(StorageError::file_too_large(size, self.max_bytes));
        }

        let file_name = ActionPlanReport::file_name_for(&report_id, generated_at);
        self.reports.write().await.insert(
            report_id,
            StoredReport {
                file_name: file_name.clone(),
                content: content.to_string(),
                written_at: Timestamp::now(),
            },
        );
        Ok(FilePath::from(file_name.as_str()))
    }

    async fn read(&self, report_id: ReportId) -> Result<String, StorageError> {
        self.reports
            .read()
            .await
            .get(&report_id)
            .map(|r| r.content.clone())
            .ok_or_else(|| Self::missing(report_id))
    }

    async fn exists(&self, report_id: ReportId) -> Result<bool, StorageError> {
        Ok(self.reports.read().await.contains_key(&report_id))
    }

    async fn delete(&self, report_id: ReportId) -> Result<(), StorageError> {
        self.reports
            .write()
            .await
            .remove(&report_id)
            .map(|_| ())
            .ok_or_else(|| Self::missing(report_id))
    }

    async fn metadata(&self, report_id: ReportId) -> Result<FileMetadata, StorageError> {
        let reports = self.reports.read().await;
        let stored = reports.get(&report_id).ok_or_else(|| Self::missing(report_id))?;

        let mut hasher = Sha256::new();
        hasher.update(stored.content.as_bytes());
        Ok(FileMetadata::new(
            stored.content.len() as u64,
            stored.written_at,
            format!("{:x}", hasher.finalize()),
        ))
    }

    async fn list(&self) -> Result<Vec<FileInfo>, StorageError> {
        let reports = self.reports.read().await;
        let mut files: Vec<FileInfo> = reports
            .iter()
            .map(|(id, r)| {
                FileInfo::new(
                    *id,
                    FilePath::from(r.file_name.as_str()),
                    r.content.len() as u64,
                    r.written_at,
                )
            })
            .collect();
        files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(files)
    }
}
