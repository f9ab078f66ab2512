//! Local Filesystem Storage Adapter - Implementation of ReportFileStorage.
//!
//! Stores action-plan reports as JSON files in a single output directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::report::ActionPlanReport;
use crate::ports::{FileInfo, FileMetadata, FilePath, ReportFileStorage, StorageError};

/// Local filesystem storage for exported reports.
///
/// # Directory Structure
///
/// ```text
/// {output_dir}/
/// ├── action_plan_20240115_6f1c...json
/// └── action_plan_20240302_a9e0...json
/// ```
///
/// # Atomic Writes
///
/// 1. Write content to `{file}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file}`
#[derive(Debug, Clone)]
pub struct LocalReportFileStorage {
    output_dir: PathBuf,
    max_bytes: u64,
}

impl LocalReportFileStorage {
    /// Creates storage rooted at `output_dir` that rejects content over `max_bytes`.
    pub fn new(output_dir: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_bytes,
        }
    }

    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    async fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }

    /// Hex-encoded SHA-256 of the content.
    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn system_time_to_timestamp(system_time: SystemTime) -> Timestamp {
        let datetime: DateTime<Utc> = system_time.into();
        Timestamp::from_datetime(datetime)
    }

    fn map_io_error(path: &std::path::Path, action: &str, e: std::io::Error) -> StorageError {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            _ => StorageError::io(format!("Failed to {} {}: {}", action, path.display(), e)),
        }
    }

    async fn write_temp(temp_path: &std::path::Path, content: &str) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| Self::map_io_error(temp_path, "create temp file", e))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Self::map_io_error(temp_path, "write temp file", e))?;

        file.sync_all()
            .await
            .map_err(|e| Self::map_io_error(temp_path, "sync temp file", e))
    }

    /// Finds the file holding `report_id`, whatever date it was written on.
    async fn locate(&self, report_id: ReportId) -> Result<Option<PathBuf>, StorageError> {
        if !fs::try_exists(&self.output_dir).await.unwrap_or(false) {
            return Ok(None);
        }

        let mut entries = fs::read_dir(&self.output_dir)
            .await
            .map_err(|e| Self::map_io_error(&self.output_dir, "read directory", e))?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::io(format!("Failed to read directory entry: {}", e))
        })? {
            let file_name = entry.file_name();
            if ActionPlanReport::parse_file_name(&file_name.to_string_lossy()) == Some(report_id) {
                return Ok(Some(entry.path()));
            }
        }
        Ok(None)
    }

    async fn require(&self, report_id: ReportId) -> Result<PathBuf, StorageError> {
        self.locate(report_id)
            .await?
            .ok_or_else(|| StorageError::not_found(format!("report {}", report_id)))
    }
}

#[async_trait]
impl ReportFileStorage for LocalReportFileStorage {
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

        self.ensure_output_dir().await?;

        let file_name = ActionPlanReport::file_name_for(&report_id, generated_at);
        let final_path = self.output_dir.join(&file_name);
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        let written = match Self::write_temp(&temp_path, content).await {
            Ok(()) => fs::rename(&temp_path, &final_path).await.map_err(|e| {
                StorageError::io(format!(
                    "Failed to rename {} to {}: {}",
                    temp_path.display(),
                    final_path.display(),
                    e
                ))
            }),
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            // Best effort
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        info!(
            report_id = %report_id,
            path = %final_path.display(),
            size_bytes = size,
            "Report written"
        );
        Ok(FilePath::new(final_path))
    }

    async fn read(&self, report_id: ReportId) -> Result<String, StorageError> {
        let path = self.require(report_id).await?;
        fs::read_to_string(&path)
            .await
            .map_err(|e| Self::map_io_error(&path, "read", e))
    }

    async fn exists(&self, report_id: ReportId) -> Result<bool, StorageError> {
        Ok(self.locate(report_id).await?.is_some())
    }

    async fn delete(&self, report_id: ReportId) -> Result<(), StorageError> {
        let path = self.require(report_id).await?;
        fs::remove_file(&path)
            .await
            .map_err(|e| Self::map_io_error(&path, "delete", e))?;
        debug!(report_id = %report_id, "Report deleted");
        Ok(())
    }

    async fn metadata(&self, report_id: ReportId) -> Result<FileMetadata, StorageError> {
        let path = self.require(report_id).await?;

        let file_meta = fs::metadata(&path)
            .await
            .map_err(|e| Self::map_io_error(&path, "get metadata for", e))?;

        let modified = file_meta.modified().map_err(|e| {
            StorageError::io(format!(
                "Failed to get modification time for {}: {}",
                path.display(),
                e
            ))
        })?;

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| Self::map_io_error(&path, "read", e))?;

        Ok(FileMetadata::new(
            file_meta.len(),
            Self::system_time_to_timestamp(modified),
            Self::compute_checksum(&content),
        ))
    }

    async fn list(&self) -> Result<Vec<FileInfo>, StorageError> {
        if !fs::try_exists(&self.output_dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.output_dir)
            .await
            .map_err(|e| Self::map_io_error(&self.output_dir, "read directory", e))?;

        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::io(format!("Failed to read directory entry: {}", e))
        })? {
            let file_name = entry.file_name();

            // Skip temp files and anything not named like a report
            let Some(report_id) = ActionPlanReport::parse_file_name(&file_name.to_string_lossy())
            else {
                continue;
            };

            let path = entry.path();
            let meta = entry
                .metadata()
                .await
                .map_err(|e| Self::map_io_error(&path, "get metadata for", e))?;
            let modified = meta.modified().map_err(|e| {
                StorageError::io(format!(
                    "Failed to get modification time for {}: {}",
                    path.display(),
                    e
                ))
            })?;

            files.push(FileInfo::new(
                report_id,
                FilePath::new(path),
                meta.len(),
                Self::system_time_to_timestamp(modified),
            ));
        }

        // Newest first
        files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));

        Ok(files)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const LIMIT: u64 = 1024;

    fn generated_at() -> Timestamp {
        Timestamp::start_of(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    }

    fn content() -> &'static str {
        "{\"total_initiatives\": 0}"
    }

    fn create_storage() -> (LocalReportFileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalReportFileStorage::new(temp_dir.path().join("reports"), LIMIT);
        (storage, temp_dir)
    }

    // ───────────────────────────────────────────────────────────────
    // Write
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn failed_rename_leaves_no_temp_file() {
        let (storage, _temp) = create_storage();
        let id = ReportId::new();

        // A non-empty directory where the report should land makes the rename fail
        let file_name = ActionPlanReport::file_name_for(&id, &generated_at());
        let blocker = storage.output_dir().join(&file_name);
        std::fs::create_dir_all(blocker.join("occupied")).unwrap();

        let result = storage.write(id, &generated_at(), content()).await;

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert!(!storage
            .output_dir()
            .join(format!("{}.tmp", file_name))
            .exists());
    }

    #[tokio::test]
    async fn write_creates_named_file() {
        let (storage, _temp) = create_storage();
        let id = ReportId::new();

        let path = storage.write(id, &generated_at(), content()).await.unwrap();

        assert!(path.as_path().exists());
        assert_eq!(
            path.file_name(),
            Some(format!("action_plan_20240229_{}.json", id))
        );
    }

    #[tokio::test]
    async fn write_leaves_no_temp_file() {
        let (storage, _temp) = create_storage();
        storage.write(ReportId::new(), &generated_at(), content()).await.unwrap();

        let mut entries = std::fs::read_dir(storage.output_dir()).unwrap();
        let name = entries.next().unwrap().unwrap().file_name();
        assert!(!name.to_string_lossy().ends_with(".tmp"));
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn write_rejects_oversized_content() {
        let (storage, _temp) = create_storage();
        let big = "x".repeat(LIMIT as usize + 1);

        let err = storage.write(ReportId::new(), &generated_at(), &big).await.unwrap_err();

        assert!(matches!(err, StorageError::FileTooLarge { max_bytes: LIMIT, .. }));
        assert!(!storage.output_dir().exists());
    }

    // ───────────────────────────────────────────────────────────────
    // Read / exists / delete
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn read_returns_written_content() {
        let (storage, _temp) = create_storage();
        let id = ReportId::new();
        storage.write(id, &generated_at(), content()).await.unwrap();

        assert_eq!(storage.read(id).await.unwrap(), content());
    }

    #[tokio::test]
    async fn read_missing_report_is_not_found() {
        let (storage, _temp) = create_storage();
        let err = storage.read(ReportId::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn exists_and_delete() {
        let (storage, _temp) = create_storage();
        let id = ReportId::new();
        assert!(!storage.exists(id).await.unwrap());

        storage.write(id, &generated_at(), content()).await.unwrap();
        assert!(storage.exists(id).await.unwrap());

        storage.delete(id).await.unwrap();
        assert!(!storage.exists(id).await.unwrap());
        assert!(matches!(
            storage.delete(id).await.unwrap_err(),
            StorageError::NotFound { .. }
        ));
    }

    // ───────────────────────────────────────────────────────────────
    // Metadata / list
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn metadata_reports_size_and_sha256() {
        let (storage, _temp) = create_storage();
        let id = ReportId::new();
        storage.write(id, &generated_at(), "hello").await.unwrap();

        let meta = storage.metadata(id).await.unwrap();
        assert_eq!(meta.size_bytes, 5);
        assert_eq!(
            meta.checksum,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn list_returns_only_report_files() {
        let (storage, _temp) = create_storage();
        let first = ReportId::new();
        let second = ReportId::new();
        storage.write(first, &generated_at(), content()).await.unwrap();
        storage.write(second, &generated_at(), content()).await.unwrap();
        std::fs::write(storage.output_dir().join("notes.txt"), "ignore me").unwrap();

        let files = storage.list().await.unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.report_id == first));
        assert!(files.iter().any(|f| f.report_id == second));
    }

    #[tokio::test]
    async fn list_of_missing_directory_is_empty() {
        let (storage, _temp) = create_storage();
        assert!(storage.list().await.unwrap().is_empty());
    }
}
