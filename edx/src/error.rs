//! Error types for edX document operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::timestamp::TimestampError;
use crate::validate::Violation;

/// Result type for edX operations.
pub type EdxResult<T> = Result<T, EdxError>;

/// Errors that can occur while reading, writing, or mutating edX documents.
#[derive(Debug, Error)]
pub enum EdxError {
    /// The file to load does not exist.
    #[error("file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or read.
    #[error("cannot open {} for reading: {source}", path.display())]
    OpenFailed { path: PathBuf, source: io::Error },

    /// The target file could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    /// The file content is not well-formed JSON, or its root is not an object.
    #[error("JSON parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// In-memory text is not well-formed JSON, or its root is not an object.
    #[error("JSON parse error: {0}")]
    ParseText(#[source] serde_json::Error),

    /// Well-formed JSON that does not fit the document schema.
    #[error("invalid document structure: {0}")]
    Document(#[source] serde_json::Error),

    /// The document failed business-rule validation.
    #[error("{kind} validation failed: {}", join_violations(.violations))]
    ValidationFailed {
        kind: &'static str,
        violations: Vec<Violation>,
    },

    /// A timestamp string did not match the expected layout.
    #[error(transparent)]
    Format(#[from] TimestampError),

    /// An object with the same ID already exists in the library.
    #[error("object with ID {0} already exists")]
    DuplicateObjectId(String),

    /// An object with the same unique ID already exists in the library.
    #[error("object with unique ID {0} already exists")]
    DuplicateUniqueId(String),

    /// Configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EdxError {
    /// Returns the violations carried by a validation failure.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::ValidationFailed { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
