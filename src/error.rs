//! Error types for claude-rewind.
//!
//! Follows the thiserror pattern. The taxonomy mirrors how failures are
//! handled: an empty year is a named, user-facing condition; malformed log
//! lines are recovered locally and never escalate to an error here; a failed
//! report write is distinct because the report was computed but not persisted.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for claude-rewind operations.
#[derive(Error, Debug)]
pub enum RewindError {
    /// No sessions were found for the requested year.
    #[error("No Claude Code sessions found for {year}")]
    NoSessions {
        /// The year that was requested.
        year: i32,
    },

    /// JSONL parsing failed (only surfaced in strict mode).
    #[error("Failed to parse JSONL at line {line}: {message}")]
    ParseError {
        /// Line number where parsing failed.
        line: usize,
        /// Human-readable error message.
        message: String,
        /// Underlying serde_json error, if available.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The Claude data directory could not be located.
    #[error("Claude Code data directory not found. Expected at: {expected_path}")]
    ClaudeDirectoryNotFound {
        /// Expected path to the Claude data directory.
        expected_path: PathBuf,
    },

    /// The computed report could not be persisted.
    #[error("Failed to write report to {path}")]
    ReportWrite {
        /// Destination path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid argument.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        name: String,
        /// Reason why the argument is invalid.
        reason: String,
    },
}

impl RewindError {
    /// Create a new parse error.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new parse error with source.
    #[must_use]
    pub fn parse_with_source(
        line: usize,
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new config error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NoSessions { .. } => exit_codes::EXIT_NO_SESSIONS,
            Self::ParseError { .. } => exit_codes::EXIT_DATA_ERROR,
            Self::ConfigError { .. } | Self::InvalidArgument { .. } => {
                exit_codes::EXIT_CONFIG_ERROR
            }
            Self::ReportWrite { .. } => exit_codes::EXIT_WRITE_ERROR,
            Self::IoError { .. } => exit_codes::EXIT_IO_ERROR,
            _ => exit_codes::EXIT_GENERAL_ERROR,
        }
    }

    /// Check if this error is recoverable by skipping the offending record.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

/// Result type alias for claude-rewind operations.
pub type Result<T> = std::result::Result<T, RewindError>;

impl From<std::io::Error> for RewindError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for RewindError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// No sessions found for the requested year.
    pub const EXIT_NO_SESSIONS: i32 = 2;
    /// Invalid configuration or arguments.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// Report was computed but could not be written.
    pub const EXIT_WRITE_ERROR: i32 = 6;
    /// Input data format error (BSD standard).
    pub const EXIT_DATA_ERROR: i32 = 65;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let no_sessions = RewindError::NoSessions { year: 2025 };
        assert_eq!(no_sessions.exit_code(), 2);

        let parse_err = RewindError::parse(1, "test");
        assert_eq!(parse_err.exit_code(), 65);

        let write_err = RewindError::ReportWrite {
            path: PathBuf::from("/tmp/report.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(write_err.exit_code(), 6);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(RewindError::parse(1, "bad line").is_recoverable());
        assert!(!RewindError::NoSessions { year: 2024 }.is_recoverable());
    }

    #[test]
    fn test_no_sessions_message_names_year() {
        let err = RewindError::NoSessions { year: 2024 };
        assert!(err.to_string().contains("2024"));
    }
}
