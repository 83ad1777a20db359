//! Storage layer error types
//!
//! All errors that can occur while reading or committing worksheets are
//! defined here. We use `thiserror` for ergonomic error definition.

use std::path::PathBuf;

use thiserror::Error;

use crate::sheet::SheetName;

/// the main error type for storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// error from the underlying Git library
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// the requested worksheet blob was not found
    #[error("worksheet not found: {0}")]
    SheetNotFound(SheetName),

    /// the worksheet already exists
    #[error("worksheet already exists: {0}")]
    SheetAlreadyExists(SheetName),

    /// a row position past the populated area of a worksheet
    #[error("row {row} is outside worksheet {sheet}")]
    RowOutOfRange { sheet: SheetName, row: u32 },

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// the specified branch/ref was not found
    #[error("ref not found: {0}")]
    RefNotFound(String),

    /// data integrity check failed
    #[error("corrupted data at {path}: {reason}")]
    CorruptedData { path: PathBuf, reason: String },

    /// I/O error (filesystem level)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// repo is not initialized
    #[error("repository not initialized: {0}")]
    NotInitialized(PathBuf),

    /// repo is empty (no commits)
    #[error("repository is empty: no commits found")]
    EmptyRepository,

    /// the commit was not found
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// the tree entry has an unexpected type
    #[error("unexpected entry type at {path}: expected {expected}, found {found}")]
    UnexpectedEntryType {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// branch already exists
    #[error("branch already exists: {0}")]
    BranchAlreadyExists(String),

    /// the branch moved between reading a sheet and committing the write
    #[error("concurrent modification: branch {branch} was updated by another writer")]
    ConcurrentModification { branch: String },

    /// internal error that shouldn't happen
    #[error("internal error: {0}")]
    Internal(String),
}

impl StorageError {
    /// another writer moved `main` between the read and the publish
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::ConcurrentModification { .. })
    }
}

/// result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let not_found = StorageError::SheetNotFound(SheetName::new("Austin Roster").unwrap());
        assert!(!not_found.is_conflict());

        let exists = StorageError::SheetAlreadyExists(SheetName::new("Austin Roster").unwrap());
        assert!(!exists.is_conflict());

        let conflict = StorageError::ConcurrentModification {
            branch: "main".to_string(),
        };
        assert!(conflict.is_conflict());
    }
}
