//! File I/O for root documents.
//!
//! A save serializes the whole document into memory before touching the
//! filesystem, so a serialization failure never leaves a truncated file.
//! Parent directories are never created.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{render, require_object_root, RootDocument};
use crate::error::{EdxError, EdxResult};

/// Write `document` to `path` as 4-space indented UTF-8 JSON.
pub fn save<D: RootDocument>(document: &D, path: &Path) -> EdxResult<()> {
    let violations = document.save_violations();
    if !violations.is_empty() {
        warn!(
            kind = D::KIND,
            path = %path.display(),
            count = violations.len(),
            "Refusing to save"
        );
        return Err(EdxError::ValidationFailed {
            kind: D::KIND,
            violations,
        });
    }

    let value = document.to_document()?;
    let mut bytes = render(&value, true)?;
    bytes.push(b'\n');

    fs::write(path, &bytes).map_err(|source| {
        warn!(kind = D::KIND, path = %path.display(), error = %source, "Save failed");
        EdxError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(kind = D::KIND, path = %path.display(), bytes = bytes.len(), "Saved document");
    Ok(())
}

/// Read a document from `path`.
///
/// Missing keys fall back to defaults, so a parseable but incomplete file
/// loads successfully; call `validate()` to check business rules. A file
/// whose top level is not a JSON object is a parse error.
pub fn load<D: RootDocument>(path: &Path) -> EdxResult<D> {
    if !path.exists() {
        return Err(EdxError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| EdxError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_slice(&bytes)
        .and_then(|value| require_object_root(&value).map(|()| value))
        .map_err(|source| EdxError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let document = D::from_document(value)?;
    debug!(kind = D::KIND, path = %path.display(), "Loaded document");
    Ok(document)
}
