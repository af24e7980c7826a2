//! Storage traits and error types

use crate::graph::SiteGraph;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("No site graph has been stored")]
    NotFound,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for site graph storage backends
///
/// A stored graph loads back with the same pages in the same insertion order
/// and the same edges in the same order.
pub trait GraphStore {
    /// Persists a complete site graph
    fn save(&mut self, graph: &SiteGraph) -> StorageResult<()>;

    /// Loads the most recently saved site graph
    ///
    /// # Returns
    ///
    /// * `Ok(SiteGraph)` - The stored graph
    /// * `Err(StorageError::NotFound)` - Nothing has been saved yet
    fn load(&self) -> StorageResult<SiteGraph>;
}
