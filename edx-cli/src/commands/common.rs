//! Document kind detection and loading shared across commands.

use std::fs;
use std::path::Path;

use edx::{EdxError, EdxProject, LibraryFile, RootDocument};
use serde_json::Value;

use crate::error::CliError;

/// Which root document a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Project,
    Library,
}

impl DocumentKind {
    /// Guess the kind from the file extension alone.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "edx" => Some(DocumentKind::Project),
            "edxlib" | "lib" => Some(DocumentKind::Library),
            _ => None,
        }
    }

    /// Guess the kind from the top-level keys of a parsed document.
    pub fn from_keys(doc: &Value) -> Self {
        let is_library = doc.as_object().is_some_and(|map| {
            ["Objects", "objects", "Library", "library"]
                .iter()
                .any(|key| map.contains_key(*key))
        });
        if is_library {
            DocumentKind::Library
        } else {
            DocumentKind::Project
        }
    }

    /// Determine the kind of `path`, reading it if the extension is unknown.
    pub fn detect(path: &Path) -> Result<Self, CliError> {
        if let Some(kind) = Self::from_extension(path) {
            return Ok(kind);
        }
        if !path.exists() {
            return Err(EdxError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let bytes = fs::read(path).map_err(|source| EdxError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Value = serde_json::from_slice(&bytes).map_err(|source| EdxError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_keys(&doc))
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Project => EdxProject::KIND,
            DocumentKind::Library => LibraryFile::KIND,
        }
    }
}

/// A loaded document of either kind.
#[derive(Debug)]
pub enum AnyDocument {
    Project(EdxProject),
    Library(LibraryFile),
}

impl AnyDocument {
    /// Detect the kind of `path` and load it.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let document = match DocumentKind::detect(path)? {
            DocumentKind::Project => AnyDocument::Project(EdxProject::load(path)?),
            DocumentKind::Library => AnyDocument::Library(LibraryFile::load(path)?),
        };
        Ok(document)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            AnyDocument::Project(_) => DocumentKind::Project,
            AnyDocument::Library(_) => DocumentKind::Library,
        }
    }
}

/// Refuse to replace an existing file unless `force` is set.
pub fn ensure_writable(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }
    Ok(())
}
