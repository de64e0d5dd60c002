//! Library metadata and catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bag::AttributeBag;
use crate::document::{finite, StructuredDocument};
use crate::timestamp;

/// Catalog metadata for a library file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    /// Display name.
    pub name: String,

    /// Filesystem location of the library.
    pub path: String,

    /// Semantic version string (e.g., "1.2.0").
    pub version: String,

    pub author: String,

    /// Source repository URL; empty when the library is not published.
    #[serde(rename = "git-repository", alias = "gitRepository")]
    pub git_repository: String,

    /// Total size in megabytes.
    #[serde(rename = "size-mb", alias = "sizeInMB", serialize_with = "finite")]
    pub size_mb: f64,

    pub description: String,

    #[serde(
        rename = "last-modified",
        alias = "lastModified",
        with = "timestamp::wire"
    )]
    pub last_modified: DateTime<Utc>,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            version: String::new(),
            author: String::new(),
            git_repository: String::new(),
            size_mb: 0.0,
            description: String::new(),
            last_modified: timestamp::now(),
        }
    }
}

impl Library {
    /// Create library metadata stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            version: version.into(),
            ..Default::default()
        }
    }
}

impl StructuredDocument for Library {}

/// One entry in a library catalog.
///
/// Identity is the pair (`id`, `unique_id`); both must be unique within the
/// owning [`LibraryFile`](super::LibraryFile).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryObject {
    /// Human-chosen, catalog-unique ID.
    pub id: String,

    /// Machine-generated 8-hex-digit token.
    #[serde(rename = "unique-id", alias = "uniqueId")]
    pub unique_id: String,

    /// Free-form classification (e.g., "building", "vehicle").
    #[serde(rename = "asset-type", alias = "assetType")]
    pub asset_type: String,

    pub name: String,
    pub description: String,
    pub category: String,

    /// Ordered; duplicates permitted.
    pub tags: Vec<String>,

    #[serde(rename = "object-path", alias = "objectPath")]
    pub object_path: String,

    #[serde(rename = "texture-path", alias = "texturePath")]
    pub texture_path: String,

    #[serde(rename = "preview-image", alias = "previewImage")]
    pub preview_image: String,

    /// Type-specific attributes not modeled explicitly.
    #[serde(skip_serializing_if = "AttributeBag::is_empty")]
    pub properties: AttributeBag,
}

impl LibraryObject {
    /// Create an object with its identity, type, and name.
    pub fn new(
        id: impl Into<String>,
        unique_id: impl Into<String>,
        asset_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            unique_id: unique_id.into(),
            asset_type: asset_type.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the model path.
    pub fn with_object_path(mut self, path: impl Into<String>) -> Self {
        self.object_path = path.into();
        self
    }

    /// Set a property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Whether the object carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl StructuredDocument for LibraryObject {}
