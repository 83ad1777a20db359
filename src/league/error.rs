//! League operation errors.

use thiserror::Error;

use crate::sheet::SheetError;

/// Result type for league operations.
pub type LeagueResult<T> = Result<T, LeagueError>;

/// Errors raised by consistency operations and queries.
///
/// The first three carry a message meant for the person who issued the
/// command. `StoreUnavailable` wraps whatever the table access layer
/// reported and is only summarized to users.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] SheetError),
}

impl LeagueError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LeagueError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        LeagueError::NotFound(message.into())
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        LeagueError::AlreadyExists(message.into())
    }

    /// Short machine-friendly name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LeagueError::InvalidArgument(_) => "invalid_argument",
            LeagueError::NotFound(_) => "not_found",
            LeagueError::AlreadyExists(_) => "already_exists",
            LeagueError::StoreUnavailable(_) => "store_unavailable",
        }
    }

    /// check if this error is a caller mistake rather than a store failure
    pub fn is_user_error(&self) -> bool {
        !matches!(self, LeagueError::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_messages() {
        let err = LeagueError::not_found("RHEA not found on Austin's roster");
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_string(), "RHEA not found on Austin's roster");
        assert!(err.is_user_error());

        let err = LeagueError::from(SheetError::Unavailable("quota exceeded".into()));
        assert_eq!(err.kind(), "store_unavailable");
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
