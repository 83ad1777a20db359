//! Command front-end errors.

use thiserror::Error;

use crate::league::LeagueError;
use crate::storage::StorageError;

/// Result type for command handling.
pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error("{0}")]
    BadArgument(String),

    #[error("unterminated quote in command")]
    UnterminatedQuote,

    #[error("{command} requires the '{role}' role")]
    PermissionDenied { command: String, role: String },

    #[error(transparent)]
    League(#[from] LeagueError),

    /// the store could not be opened for this command
    #[error("could not open league store: {0}")]
    Connect(#[source] StorageError),
}

impl CommandError {
    /// Text shown to the person who issued the command.
    ///
    /// Store failures are summarized; the full error goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::League(LeagueError::StoreUnavailable(_)) | CommandError::Connect(_) => {
                "The league store is unavailable right now. Details are in the bot log.".to_string()
            }
            CommandError::League(e) => e.to_string(),
            CommandError::UnknownCommand(name) => {
                format!("Unknown command '{}'. Use help to list commands.", name)
            }
            CommandError::Usage(usage) => format!("Usage: {}", usage),
            other => capitalize(&other.to_string()),
        }
    }

    /// `❌`-prefixed chat reply.
    pub fn reply(&self) -> String {
        format!("❌ {}", self.user_message())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) => "unknown_command",
            CommandError::Usage(_) | CommandError::BadArgument(_) | CommandError::UnterminatedQuote => {
                "usage"
            }
            CommandError::PermissionDenied { .. } => "permission_denied",
            CommandError::League(e) => e.kind(),
            CommandError::Connect(_) => "store_unavailable",
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetError;

    #[test]
    fn test_store_errors_are_summarized() {
        let err = CommandError::from(LeagueError::from(SheetError::Unavailable(
            "secret transport detail".into(),
        )));
        assert!(!err.reply().contains("secret"));
        assert!(err.reply().starts_with("❌ "));
        assert_eq!(err.kind(), "store_unavailable");
    }

    #[test]
    fn test_user_errors_pass_through() {
        let err = CommandError::from(LeagueError::not_found("GIULIA not found in free agents"));
        assert_eq!(err.reply(), "❌ GIULIA not found in free agents");

        let err = CommandError::PermissionDenied {
            command: "!newchamp".into(),
            role: "WWE League".into(),
        };
        assert_eq!(err.user_message(), "!newchamp requires the 'WWE League' role");
        assert_eq!(
            CommandError::UnterminatedQuote.user_message(),
            "Unterminated quote in command"
        );
    }
}
