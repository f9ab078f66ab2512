//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ReportFileStorage` - Filesystem operations for exported action-plan reports

mod report_file_storage;

pub use report_file_storage::{FileInfo, FileMetadata, FilePath, ReportFileStorage, StorageError};
