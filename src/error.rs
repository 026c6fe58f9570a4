//! Error types for todo
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (unknown task, position outside the list, bad args)
//! - 4: Operation failed (filesystem error, corrupt data file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todo CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todo operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task not found: {0}")]
    NotFound(u64),

    #[error("Position {position} is out of range (1-{count})")]
    OutOfRange { position: usize, count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Malformed task data in {path}: {source}")]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::NotFound(_) | Error::OutOfRange { .. } | Error::InvalidArgument(_) => {
                exit_codes::USER_ERROR
            }

            // Operation failures
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) | Error::MalformedData { .. } => {
                exit_codes::OPERATION_FAILED
            }
        }
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
        }
    }
}
