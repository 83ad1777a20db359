//! Table access error types.

use thiserror::Error;

use crate::sheet::address::AddressError;
use crate::sheet::types::InvalidNameError;
use crate::storage::StorageError;

/// Errors surfaced by a [`Workbook`](crate::sheet::Workbook) implementation.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    #[error("invalid sheet name: {0}")]
    InvalidSheetName(#[from] InvalidNameError),

    #[error("worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("worksheet already exists: {0}")]
    SheetAlreadyExists(String),

    #[error("row {row} is outside worksheet {sheet}")]
    RowOutOfRange { sheet: String, row: u32 },

    /// error from the git-backed store
    #[error("store error: {0}")]
    Storage(#[from] StorageError),

    /// any other transport failure reported by an adapter
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// result type alias for table access
pub type SheetResult<T> = Result<T, SheetError>;
