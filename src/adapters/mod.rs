//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `report` - Report file storage (local filesystem, in-memory)

pub mod report;

pub use report::{InMemoryReportFileStorage, LocalReportFileStorage};
