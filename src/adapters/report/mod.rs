//! Report storage adapters.

mod in_memory_storage;
mod local_file_storage;

pub use in_memory_storage::InMemoryReportFileStorage;
pub use local_file_storage::LocalReportFileStorage;
