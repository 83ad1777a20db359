//! Validated worksheet names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated worksheet name.
///
/// Names double as file names in the git store, so they are restricted:
/// - 1-100 characters
/// - no path separators or control characters
/// - cannot start with `.` or `_` (reserved for store metadata)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SheetName(String);

impl SheetName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), InvalidNameError> {
        let Some(first) = name.chars().next() else {
            return Err(InvalidNameError::Empty);
        };

        let len = name.chars().count();
        if len > 100 {
            return Err(InvalidNameError::TooLong(len));
        }

        if first == '.' || first == '_' || first.is_whitespace() {
            return Err(InvalidNameError::InvalidStart(first));
        }

        for (i, c) in name.chars().enumerate() {
            if c == '/' || c == '\\' || c.is_control() {
                return Err(InvalidNameError::InvalidCharacter { char: c, position: i });
            }
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SheetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// error type for invalid sheet names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNameError {
    Empty,
    TooLong(usize),
    InvalidStart(char),
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name cannot be empty"),
            Self::TooLong(len) => write!(f, "name too long: {} characters", len),
            Self::InvalidStart(c) => write!(f, "name cannot start with '{}'", c),
            Self::InvalidCharacter { char, position } => {
                write!(f, "invalid character '{}' at position {}", char, position)
            }
        }
    }
}

impl std::error::Error for InvalidNameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name_valid() {
        assert!(SheetName::new("Championship Tracker").is_ok());
        assert!(SheetName::new("Austin Roster").is_ok());
        assert!(SheetName::new("NXT Free Agents").is_ok());
    }

    #[test]
    fn test_sheet_name_invalid() {
        assert_eq!(SheetName::new(""), Err(InvalidNameError::Empty));
        assert!(SheetName::new("_meta").is_err());
        assert!(SheetName::new(".git").is_err());
        assert!(SheetName::new("a/b").is_err());
        assert!(SheetName::new("x".repeat(101)).is_err());
    }
}
