//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while saving or loading the book file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the book file failed
    #[error("Failed to access book file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a valid book
    #[error("Book file is corrupt or unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while executing a command handler.
///
/// Every variant is converted to a one-line user-facing message at the
/// loop boundary; none terminate the loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Bad phone or date format
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Name or phone lookup miss
    #[error("Contact not found.")]
    NotFound,

    /// Too few arguments for the command
    #[error("Incomplete command. Please check and try again.")]
    IncompleteCommand,

    /// Save or load failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::NotFound;
        assert_eq!(err.to_string(), "Contact not found.");

        let err = CommandError::IncompleteCommand;
        assert_eq!(err.to_string(), "Incomplete command. Please check and try again.");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_PATH".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_PATH: Cannot be empty"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CommandError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits.");
    }
}
