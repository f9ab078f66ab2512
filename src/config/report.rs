//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Default cap on a single report file (5 MiB).
pub const DEFAULT_MAX_REPORT_BYTES: u64 = 5 * 1024 * 1024;

/// Report export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Number of initiatives shown in the timeline view
    #[serde(default = "default_timeline_limit")]
    pub timeline_limit: usize,

    /// Largest report the storage adapter accepts
    #[serde(default = "default_max_report_bytes")]
    pub max_report_bytes: u64,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("report.output_dir"));
        }
        if self.timeline_limit == 0 {
            return Err(ValidationError::InvalidTimelineLimit);
        }
        if self.max_report_bytes == 0 {
            return Err(ValidationError::InvalidMaxReportSize);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            timeline_limit: default_timeline_limit(),
            max_report_bytes: default_max_report_bytes(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_timeline_limit() -> usize {
    5
}

fn default_max_report_bytes() -> u64 {
    DEFAULT_MAX_REPORT_BYTES
}
