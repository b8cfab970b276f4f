//! @ai:module:intent Error types for the AA benchmark harness
//! @ai:module:layer domain
//! @ai:module:public_api HarnessError, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for every fatal harness failure
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Invalid arguments: {0}")]
    Argument(String),

    #[error("Command `{command}` failed with {status}")]
    ProcessExecution { command: String, status: String },

    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to pull {remote} from device: {status}")]
    Transfer { remote: String, status: String },

    #[error("Command `{command}` did not finish within {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("Failed to parse stat artifact {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// @ai:intent Process exit code for this failure
    /// @ai:effects pure
    pub fn exit_code(&self) -> u8 {
        match self {
            HarnessError::Argument(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
