//! High-level facade over the document types.
//!
//! [`EdxManager`] bundles the user's [`EdxConfig`] with a
//! [`UniqueIdGenerator`] so callers can create, load, save, and exchange
//! documents without wiring validation and ID assignment themselves.
//!
//! # Example
//!
//! ```no_run
//! use edx::manager::EdxManager;
//!
//! let manager = EdxManager::new();
//! let mut project = manager.create_project("San Francisco", "Jane Doe", Some("KSFO"));
//! project.airport.datum_lat = 37.6213;
//! project.airport.datum_lon = -122.379;
//! manager.save_project(&mut project, "ksfo.edx")?;
//! # Ok::<(), edx::EdxError>(())
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::RngCore;
use semver::{BuildMetadata, Version};
use tracing::{debug, info, warn};

use crate::config::EdxConfig;
use crate::document::RootDocument;
use crate::error::{EdxError, EdxResult};
use crate::id::UniqueIdGenerator;
use crate::library::{Library, LibraryFile, LibraryObject};
use crate::project::{AirportInfo, EdxProject};
use crate::timestamp;

/// File format version written into new projects.
pub const FORMAT_VERSION: &str = "0.0.3+42";

/// Version given to libraries created without one.
pub const DEFAULT_LIBRARY_VERSION: &str = "1.0.0";

const FORMAT_BUILD: &str = "42";

/// The file format version as a structured value.
pub fn format_version() -> Version {
    Version {
        build: BuildMetadata::new(FORMAT_BUILD).unwrap_or_default(),
        ..Version::new(0, 0, 3)
    }
}

/// Creates, loads, validates, and saves edX documents.
#[derive(Debug)]
pub struct EdxManager<R = StdRng> {
    config: EdxConfig,
    ids: UniqueIdGenerator<R>,
}

impl EdxManager<StdRng> {
    /// Create a manager with default configuration.
    pub fn new() -> Self {
        Self::with_config(EdxConfig::default())
    }

    /// Create a manager from an explicit configuration.
    pub fn with_config(config: EdxConfig) -> Self {
        Self::with_generator(config, UniqueIdGenerator::new())
    }
}

impl Default for EdxManager<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> EdxManager<R> {
    /// Create a manager with an injected ID generator.
    pub fn with_generator(config: EdxConfig, ids: UniqueIdGenerator<R>) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &EdxConfig {
        &self.config
    }

    /// Start a new project stamped with the current time.
    ///
    /// An empty `author` falls back to the configured default author.
    pub fn create_project(&self, name: &str, author: &str, icao: Option<&str>) -> EdxProject {
        let mut project = EdxProject::default();
        let now = timestamp::now();

        project.project.name = name.to_string();
        project.project.author = self.author_or_default(author);
        project.project.editor_version = FORMAT_VERSION.to_string();
        project.project.create_date = now;
        project.project.edit_date = now;

        if let Some(icao) = icao {
            project.airport = AirportInfo::with_icao(icao);
        }

        info!(name, icao = icao.unwrap_or(""), "Created project");
        project
    }

    /// Start a new, empty library.
    pub fn create_library(&self, name: &str, author: &str, version: &str) -> LibraryFile {
        let library = Library::new(name, self.author_or_default(author), version);
        info!(name, version, "Created library");
        LibraryFile::new(library)
    }

    /// Start a new library at [`DEFAULT_LIBRARY_VERSION`].
    pub fn create_library_default(&self, name: &str, author: &str) -> LibraryFile {
        self.create_library(name, author, DEFAULT_LIBRARY_VERSION)
    }

    /// Build a library object with a freshly generated unique ID.
    pub fn new_object(&mut self, id: &str, asset_type: &str, name: &str) -> LibraryObject {
        LibraryObject::new(id, self.ids.generate(), asset_type, name)
    }

    /// Add `object` to `library`, generating a unique ID if it has none.
    ///
    /// IDs already present in `library` are never issued.
    pub fn add_object(
        &mut self,
        library: &mut LibraryFile,
        mut object: LibraryObject,
    ) -> EdxResult<()> {
        for existing in &library.objects {
            if !existing.unique_id.is_empty() {
                self.ids.reserve(existing.unique_id.as_str());
            }
        }
        if object.unique_id.is_empty() {
            object.unique_id = self.ids.generate();
            debug!(id = %object.id, unique_id = %object.unique_id, "Assigned unique ID");
        }
        library.add_object(object)
    }

    pub fn load_project(&self, path: impl AsRef<Path>) -> EdxResult<EdxProject> {
        EdxProject::load(path)
    }

    pub fn load_library(&self, path: impl AsRef<Path>) -> EdxResult<LibraryFile> {
        LibraryFile::load(path)
    }

    /// Validate, stamp the edit date, then write `project` to `path`.
    ///
    /// Nothing is written when validation fails.
    pub fn save_project(&self, project: &mut EdxProject, path: impl AsRef<Path>) -> EdxResult<()> {
        let path = path.as_ref();
        self.check_before_save(project)?;
        project.project.touch(timestamp::now());
        project.save(path)?;
        info!(path = %path.display(), name = %project.project.name, "Saved project");
        Ok(())
    }

    /// Validate, stamp the modification date, then write `library` to `path`.
    ///
    /// Nothing is written when validation fails.
    pub fn save_library(&self, library: &mut LibraryFile, path: impl AsRef<Path>) -> EdxResult<()> {
        let path = path.as_ref();
        self.check_before_save(library)?;
        library.library.last_modified = timestamp::now();
        library.save(path)?;
        info!(
            path = %path.display(),
            name = %library.library.name,
            objects = library.object_count(),
            "Saved library"
        );
        Ok(())
    }

    pub fn export_project_to_text(&self, project: &EdxProject, pretty: bool) -> EdxResult<String> {
        project.to_text(pretty)
    }

    pub fn import_project_from_text(&self, text: &str) -> EdxResult<EdxProject> {
        EdxProject::from_text(text)
    }

    pub fn export_library_to_text(&self, library: &LibraryFile, pretty: bool) -> EdxResult<String> {
        library.to_text(pretty)
    }

    pub fn import_library_from_text(&self, text: &str) -> EdxResult<LibraryFile> {
        LibraryFile::from_text(text)
    }

    /// Whether `path` loads as a project. Business rules are not checked.
    pub fn is_valid_project_file(&self, path: impl AsRef<Path>) -> bool {
        probe::<EdxProject>(path.as_ref())
    }

    /// Whether `path` loads as a library. Business rules are not checked.
    pub fn is_valid_library_file(&self, path: impl AsRef<Path>) -> bool {
        probe::<LibraryFile>(path.as_ref())
    }

    fn author_or_default(&self, author: &str) -> String {
        if author.is_empty() {
            self.config.author.clone()
        } else {
            author.to_string()
        }
    }

    fn check_before_save<D: RootDocument>(&self, document: &D) -> EdxResult<()> {
        if !self.config.validate_on_save {
            return Ok(());
        }
        let violations = document.validate_with(self.config.validation_mode());
        if violations.is_empty() {
            return Ok(());
        }
        warn!(kind = D::KIND, count = violations.len(), "Refusing to save invalid document");
        Err(EdxError::ValidationFailed {
            kind: D::KIND,
            violations,
        })
    }
}

fn probe<D: RootDocument>(path: &Path) -> bool {
    match D::load(path) {
        Ok(_) => true,
        Err(e) => {
            debug!(kind = D::KIND, path = %path.display(), error = %e, "Not a loadable file");
            false
        }
    }
}
