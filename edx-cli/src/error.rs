//! CLI error types.

use edx::{ConfigError, EdxError};
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Document(#[from] EdxError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),

    #[error("{count} violation(s) found")]
    Invalid { count: usize },
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Validation findings exit with 1; everything else exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Invalid { .. } => 1,
            _ => 2,
        }
    }
}
