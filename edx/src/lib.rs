//! edX - Project and library files for scenery editors
//!
//! This library defines the JSON-backed edX file format: a typed data model
//! for airport scenery projects and reusable asset libraries, the contract
//! that maps it to and from JSON, and the validation rules a document must
//! satisfy before it is saved.
//!
//! # Documents
//!
//! - [`EdxProject`]: airport metadata plus the placed scene (libraries,
//!   assets, layers).
//! - [`LibraryFile`]: a catalog of reusable objects with unique IDs.
//!
//! Both implement [`RootDocument`], which provides `validate`, `save`,
//! `load`, `to_text`, and `from_text`.
//!
//! # Example
//!
//! ```
//! use edx::{EdxProject, RootDocument};
//!
//! let text = r#"{ "Project": { "name": "Demo", "editor-version": "0.0.3+42" },
//!                 "Airport": { "ICAO": "EDDF", "DatumLat": 50.03, "DatumLon": 8.57 } }"#;
//! let project = EdxProject::from_text(text)?;
//! assert!(project.is_valid());
//! assert_eq!(project.airport.transition_level, "FL180");
//! # Ok::<(), edx::EdxError>(())
//! ```

pub mod bag;
pub mod config;
pub mod document;
pub mod error;
pub mod id;
pub mod io;
pub mod library;
pub mod logging;
pub mod manager;
pub mod project;
pub mod timestamp;
pub mod validate;

pub use bag::AttributeBag;
pub use config::{ConfigError, EdxConfig, LoggingConfig};
pub use document::{RootDocument, StructuredDocument};
pub use error::{EdxError, EdxResult};
pub use id::UniqueIdGenerator;
pub use library::{Library, LibraryFile, LibraryObject};
pub use manager::EdxManager;
pub use project::{
    AirportInfo, EdxProject, Frequency, FrequencyKind, LibraryReference, ProjectInfo, SceneAsset,
    SceneLayer,
};
pub use validate::{ValidationMode, Violation, ViolationCode};
