//! Error types for the codebase tools
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type shared by the formatter and replacer
#[derive(Error, Debug)]
pub enum ToolError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External process errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Invalid glob pattern
    #[error("Invalid file filter '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Failure writing the progress report
    #[error("Failed to write report output")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ToolError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a process error for a command that ran and exited unsuccessfully
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a process error for a command that could not be started
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            message: format!("Failed to execute command: {source}"),
            source: Some(source),
        }
    }

    /// Create a new pattern error
    pub fn pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Exit status of an external command that ran and failed.
    ///
    /// `None` for every other error, including commands that never started.
    #[must_use]
    pub const fn external_exit_code(&self) -> Option<i32> {
        match self {
            Self::Process { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Whether this error comes from an external command that started and
    /// then failed, with or without an exit code.
    #[must_use]
    pub const fn is_external_failure(&self) -> bool {
        matches!(self, Self::Process { source: None, .. })
    }
}

impl From<std::io::Error> for ToolError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ToolError>;
