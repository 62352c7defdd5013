//! Error types for the CLI

use thiserror::Error;
use widgetry::notes::NotesError;
use widgetry::storage::StorageError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Expression evaluated to the error display
    #[error("Calculation failed: {message}")]
    Calc {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Notes board error, including blank-input alerts
    #[error("{0}")]
    Notes(#[from] NotesError),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON output error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a calculation error
    #[must_use]
    pub fn calc(message: impl Into<String>) -> Self {
        Self::Calc {
            message: message.into(),
        }
    }

    /// Out-of-range 1-based position
    #[must_use]
    pub fn no_such_note(position: usize, len: usize) -> Self {
        Self::invalid_argument(format!("no note #{position} (board has {len})"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad data file");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad data file"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_no_such_note() {
        let err = CliError::no_such_note(7, 2);
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("#7"));
    }

    #[test]
    fn test_calc_error() {
        let err = CliError::calc("Division by zero");
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn test_notes_error_shows_alert_text() {
        let err: CliError = NotesError::EmptyHeading.into();
        assert_eq!(err.to_string(), "Please enter a note heading!");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }
}
