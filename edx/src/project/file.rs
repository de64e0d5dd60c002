//! The project root document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::airport::AirportInfo;
use super::info::ProjectInfo;
use super::scene::{LibraryReference, SceneAsset, SceneLayer};
use super::validation;
use crate::bag::AttributeBag;
use crate::document::{RootDocument, RootShape, StructuredDocument};
use crate::error::EdxResult;
use crate::validate::{ValidationMode, Violation, ViolationCode};

/// A scenery project: airport, library dependencies, and scene layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdxProject {
    #[serde(rename = "Project", alias = "project")]
    pub project: ProjectInfo,

    #[serde(rename = "Airport", alias = "airport")]
    pub airport: AirportInfo,

    #[serde(rename = "Libraries", alias = "libraries")]
    pub libraries: Vec<LibraryReference>,

    #[serde(rename = "Assets", alias = "assets")]
    pub assets: Vec<SceneAsset>,

    #[serde(rename = "Layers", alias = "layers")]
    pub layers: Vec<SceneLayer>,

    /// Project-wide options outside the fixed schema.
    #[serde(
        rename = "Settings",
        alias = "settings",
        skip_serializing_if = "AttributeBag::is_empty"
    )]
    pub settings: AttributeBag,
}

impl EdxProject {
    /// Find the first asset with `id`.
    pub fn find_asset(&self, id: &str) -> Option<&SceneAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Find the first asset with `id` for modification.
    pub fn find_asset_mut(&mut self, id: &str) -> Option<&mut SceneAsset> {
        self.assets.iter_mut().find(|a| a.id == id)
    }

    /// Find a library reference by its short ID.
    pub fn find_library(&self, short_id: &str) -> Option<&LibraryReference> {
        self.libraries.iter().find(|l| l.short_id == short_id)
    }

    pub fn find_layer(&self, layer_id: &str) -> Option<&SceneLayer> {
        self.layers.iter().find(|l| l.layer_id == layer_id)
    }

    /// Assets whose `layer_id` is `layer_id`, in document order.
    pub fn assets_in_layer<'a>(
        &'a self,
        layer_id: &'a str,
    ) -> impl Iterator<Item = &'a SceneAsset> + 'a {
        self.assets.iter().filter(move |a| a.layer_id == layer_id)
    }

    /// Layers sorted by z-order; ties keep document order.
    pub fn layers_by_z_order(&self) -> Vec<&SceneLayer> {
        let mut layers: Vec<_> = self.layers.iter().collect();
        layers.sort_by_key(|l| l.z_order);
        layers
    }
}

const SHAPE: RootShape = RootShape {
    objects: &["Project", "project", "Airport", "airport"],
    lists: &[
        "Libraries",
        "libraries",
        "Assets",
        "assets",
        "Layers",
        "layers",
    ],
    timestamps: &[
        ("Project", "editdate"),
        ("Project", "editDate"),
        ("Project", "createdate"),
        ("Project", "createDate"),
        ("project", "editdate"),
        ("project", "editDate"),
        ("project", "createdate"),
        ("project", "createDate"),
    ],
};

impl StructuredDocument for EdxProject {
    fn from_document(value: Value) -> EdxResult<Self> {
        SHAPE.decode(value)
    }
}

impl RootDocument for EdxProject {
    const KIND: &'static str = "project";

    fn validate_with(&self, mode: ValidationMode) -> Vec<Violation> {
        validation::validate(self, mode)
    }

    /// A project is never written with an edit date before its create date.
    fn save_violations(&self) -> Vec<Violation> {
        if self.project.edit_date < self.project.create_date {
            vec![Violation::new(
                ViolationCode::EditBeforeCreate,
                validation::EDIT_BEFORE_CREATE,
            )]
        } else {
            Vec::new()
        }
    }
}
