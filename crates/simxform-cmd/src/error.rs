//! Error types for the command-line front end

use simxform_algos::AlignError;
use thiserror::Error;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur while producing a report
#[derive(Debug, Error)]
pub enum CmdError {
    /// The solver rejected the input
    #[error("alignment failed: {0}")]
    Align(#[from] AlignError),

    /// Unrecognized command-line argument
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CmdError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CmdError::UnknownArgument(_) => 2,
            _ => 1,
        }
    }
}
