//! Project files: airport plus scene layout.
//!
//! An [`EdxProject`] is one of the two root document types. It owns its
//! [`ProjectInfo`], [`AirportInfo`], and the ordered collections of
//! [`LibraryReference`], [`SceneAsset`], and [`SceneLayer`] records.
//!
//! # Wire Format
//!
//! ```text
//! {
//!     "Project":   { "name", "editor-version", "XPlaneVersion", "author",
//!                    "editdate", "createdate", "description" },
//!     "Airport":   { "Name", "ICAO", "IATA", "FAA", "City", "State", "Country",
//!                    "RegionCode", "DatumLat", "DatumLon", "Elevation", "MagVar",
//!                    "TransitionAlt", "TransitionLevel",
//!                    "CTAF"?, "ATIS"?, "Tower"?, "Ground"?, "Approach"?,
//!                    "Departure"?, "Clearance"? },
//!     "Libraries": [ { "Library", "local-path", "entry-count", "uuid",
//!                      "short-id", "version" } ],
//!     "Assets":    [ { "id", "unique-id", "latitude", "longitude", "altitude",
//!                      "heading", "associated-library", "layer-id", "group-id"?,
//!                      "locked", "hidden", "selected", "other-properties"? } ],
//!     "Layers":    [ { "layer-id", "name", "description", "locked", "hidden",
//!                      "opacity", "z-order", "asset-ids", "layer-properties"? } ],
//!     "Settings"?: { ... }
//! }
//! ```
//!
//! Readers also accept the camelCase spelling of every key
//! (`project`, `editorVersion`, `datumLat`, `uniqueId`, ...); writers only
//! emit the layout above.

mod airport;
mod file;
mod info;
mod scene;
mod validation;

pub use airport::{
    AirportInfo, Frequency, FrequencyKind, DEFAULT_TRANSITION_ALTITUDE, DEFAULT_TRANSITION_LEVEL,
};
pub use file::EdxProject;
pub use info::ProjectInfo;
pub use scene::{LibraryReference, SceneAsset, SceneLayer};
pub use validation::ICAO_LEN;
