//! The library root document and its object collection.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::types::{Library, LibraryObject};
use super::validation;
use crate::document::{RootDocument, RootShape, StructuredDocument};
use crate::error::{EdxError, EdxResult};
use crate::validate::{ValidationMode, Violation};

/// A reusable asset catalog: one [`Library`] plus its ordered objects.
///
/// Objects added through [`add_object`](Self::add_object) are guaranteed to
/// have distinct `id` and `unique_id` values. Direct pushes to `objects`
/// bypass that check; [`validate`](RootDocument::validate) reports any
/// duplicates that result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryFile {
    #[serde(rename = "Library", alias = "library")]
    pub library: Library,

    #[serde(rename = "Objects", alias = "objects")]
    pub objects: Vec<LibraryObject>,
}

impl LibraryFile {
    /// Create an empty library file around the given metadata.
    pub fn new(library: Library) -> Self {
        Self {
            library,
            objects: Vec::new(),
        }
    }

    /// Append `object` unless its `id` or `unique_id` is already taken.
    ///
    /// On rejection the collection is left unchanged.
    pub fn add_object(&mut self, object: LibraryObject) -> EdxResult<()> {
        if let Some(existing) = self.objects.iter().find(|o| o.id == object.id) {
            warn!(id = %existing.id, "Object ID already exists, not adding");
            return Err(EdxError::DuplicateObjectId(object.id));
        }
        if let Some(existing) = self
            .objects
            .iter()
            .find(|o| o.unique_id == object.unique_id)
        {
            warn!(
                id = %object.id,
                unique_id = %existing.unique_id,
                "Object unique ID already exists, not adding"
            );
            return Err(EdxError::DuplicateUniqueId(object.unique_id));
        }
        self.objects.push(object);
        Ok(())
    }

    /// Remove the first object with `id`. Returns true if one was removed.
    pub fn remove_object(&mut self, id: &str) -> bool {
        match self.objects.iter().position(|o| o.id == id) {
            Some(idx) => {
                self.objects.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Find the first object with `id`.
    pub fn find_object(&self, id: &str) -> Option<&LibraryObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Find the first object with `id` for modification.
    pub fn find_object_mut(&mut self, id: &str) -> Option<&mut LibraryObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Whether any object carries `unique_id`.
    pub fn contains_unique_id(&self, unique_id: &str) -> bool {
        self.objects.iter().any(|o| o.unique_id == unique_id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Distinct non-empty categories in ascending order.
    pub fn categories(&self) -> BTreeSet<String> {
        self.objects
            .iter()
            .filter(|o| !o.category.is_empty())
            .map(|o| o.category.clone())
            .collect()
    }

    /// Distinct non-empty asset types in ascending order.
    pub fn asset_types(&self) -> BTreeSet<String> {
        self.objects
            .iter()
            .filter(|o| !o.asset_type.is_empty())
            .map(|o| o.asset_type.clone())
            .collect()
    }

    /// All unique IDs currently in use.
    pub fn unique_ids(&self) -> HashSet<&str> {
        self.objects.iter().map(|o| o.unique_id.as_str()).collect()
    }
}

const SHAPE: RootShape = RootShape {
    objects: &["Library", "library"],
    lists: &["Objects", "objects"],
    timestamps: &[
        ("Library", "last-modified"),
        ("Library", "lastModified"),
        ("library", "last-modified"),
        ("library", "lastModified"),
    ],
};

impl StructuredDocument for LibraryFile {
    fn from_document(value: Value) -> EdxResult<Self> {
        SHAPE.decode(value)
    }
}

impl RootDocument for LibraryFile {
    const KIND: &'static str = "library";

    fn validate_with(&self, mode: ValidationMode) -> Vec<Violation> {
        validation::validate(self, mode)
    }
}
