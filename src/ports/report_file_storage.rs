//! Report File Storage Port - Filesystem operations for exported reports.
//!
//! The application layer depends on this trait; adapters such as
//! `LocalReportFileStorage` provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp};

/// Port for storing exported action-plan reports.
///
/// # Contract
///
/// Implementations must:
/// - Name files `action_plan_{YYYYMMDD}_{report_id}.json`
/// - Write atomically (no partial content on failure)
/// - Reject content larger than their configured limit
/// - Report a SHA-256 checksum in file metadata
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ReportFileStorage = get_storage();
///
/// let path = storage.write(report.report_id, &report.generated_at, &json).await?;
/// let content = storage.read(report.report_id).await?;
/// ```
#[async_trait]
pub trait ReportFileStorage: Send + Sync {
    /// Writes report content, creating the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileTooLarge` if the content exceeds the limit.
    async fn write(
        &self,
        report_id: ReportId,
        generated_at: &Timestamp,
        content: &str,
    ) -> Result<FilePath, StorageError>;

    /// Reads report content.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no file holds this report.
    async fn read(&self, report_id: ReportId) -> Result<String, StorageError>;

    /// Checks whether a file holds this report.
    async fn exists(&self, report_id: ReportId) -> Result<bool, StorageError>;

    /// Deletes the report file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no file holds this report.
    async fn delete(&self, report_id: ReportId) -> Result<(), StorageError>;

    /// Size, modification time and checksum of the report file.
    async fn metadata(&self, report_id: ReportId) -> Result<FileMetadata, StorageError>;

    /// Lists stored reports, newest first.
    async fn list(&self) -> Result<Vec<FileInfo>, StorageError>;
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    pub fn as_path(&self) -> &std::path::Path {
        &self.0
    }

    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(PathBuf::from(s))
    }
}

/// File metadata information.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size_bytes: u64,
    pub modified_at: Timestamp,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

impl FileMetadata {
    pub fn new(size_bytes: u64, modified_at: Timestamp, checksum: impl Into<String>) -> Self {
        Self {
            size_bytes,
            modified_at,
            checksum: checksum.into(),
        }
    }
}

/// A stored report file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Parsed from the file name.
    pub report_id: ReportId,
    pub path: FilePath,
    pub size_bytes: u64,
    pub modified_at: Timestamp,
}

impl FileInfo {
    pub fn new(
        report_id: ReportId,
        path: impl Into<FilePath>,
        size_bytes: u64,
        modified_at: Timestamp,
    ) -> Self {
        Self {
            report_id,
            path: path.into(),
            size_bytes,
            modified_at,
        }
    }
}

/// Errors that can occur during report storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::NotFound { .. } => ErrorCode::ReportNotFound,
            _ => ErrorCode::StorageError,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
