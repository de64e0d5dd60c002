//! Library references, placed assets, and layers.
//!
//! Cross-references between these records are soft: an asset's
//! `associated_library` names a [`LibraryReference::short_id`], its `layer_id`
//! names a [`SceneLayer::layer_id`], and a layer lists the asset IDs it claims.
//! None of these are enforced by baseline validation.

use serde::{Deserialize, Serialize};

use crate::bag::AttributeBag;
use crate::document::{finite, StructuredDocument};

/// A project's dependency on an external library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryReference {
    /// Display name.
    #[serde(rename = "Library", alias = "name")]
    pub name: String,

    #[serde(rename = "local-path", alias = "localPath")]
    pub local_path: String,

    /// Number of entries in the referenced library.
    #[serde(rename = "entry-count", alias = "entryCount")]
    pub entry_count: i32,

    pub uuid: String,

    /// Short, human-typed ID that scene assets use to name this library.
    #[serde(rename = "short-id", alias = "shortId")]
    pub short_id: String,

    pub version: String,
}

impl LibraryReference {
    pub fn new(name: impl Into<String>, short_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_id: short_id.into(),
            ..Default::default()
        }
    }
}

impl StructuredDocument for LibraryReference {}

/// An asset instance placed in the scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneAsset {
    pub id: String,

    #[serde(rename = "unique-id", alias = "uniqueId")]
    pub unique_id: String,

    /// Latitude in degrees, WGS84.
    #[serde(serialize_with = "finite")]
    pub latitude: f64,

    /// Longitude in degrees, WGS84.
    #[serde(serialize_with = "finite")]
    pub longitude: f64,

    #[serde(serialize_with = "finite")]
    pub altitude: f64,

    /// True heading in degrees, `[0, 360)`.
    #[serde(serialize_with = "finite")]
    pub heading: f64,

    /// Short ID of the library this asset comes from.
    #[serde(rename = "associated-library", alias = "associatedLibrary")]
    pub associated_library: String,

    #[serde(rename = "layer-id", alias = "layerId")]
    pub layer_id: String,

    #[serde(
        rename = "group-id",
        alias = "groupId",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_id: Option<String>,

    pub locked: bool,
    pub hidden: bool,
    pub selected: bool,

    #[serde(
        rename = "other-properties",
        alias = "otherProperties",
        skip_serializing_if = "AttributeBag::is_empty"
    )]
    pub other_properties: AttributeBag,
}

impl SceneAsset {
    /// Create an asset at a position.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64, heading: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            heading,
            ..Default::default()
        }
    }

    /// Set the library short ID and layer.
    pub fn placed(mut self, library: impl Into<String>, layer_id: impl Into<String>) -> Self {
        self.associated_library = library.into();
        self.layer_id = layer_id.into();
        self
    }
}

impl StructuredDocument for SceneAsset {}

/// An organizational grouping of assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLayer {
    #[serde(rename = "layer-id", alias = "layerId")]
    pub layer_id: String,

    pub name: String,
    pub description: String,
    pub locked: bool,
    pub hidden: bool,

    /// Expected in `[0, 1]`; only strict validation checks it.
    #[serde(serialize_with = "finite")]
    pub opacity: f64,

    /// Stacking order; lower values are drawn first.
    #[serde(rename = "z-order", alias = "zOrder")]
    pub z_order: i32,

    /// Asset IDs this layer claims to contain, in order.
    #[serde(rename = "asset-ids", alias = "assetIds")]
    pub asset_ids: Vec<String>,

    #[serde(
        rename = "layer-properties",
        alias = "layerProperties",
        skip_serializing_if = "AttributeBag::is_empty"
    )]
    pub layer_properties: AttributeBag,
}

impl Default for SceneLayer {
    fn default() -> Self {
        Self {
            layer_id: String::new(),
            name: String::new(),
            description: String::new(),
            locked: false,
            hidden: false,
            opacity: 1.0,
            z_order: 0,
            asset_ids: Vec::new(),
            layer_properties: AttributeBag::new(),
        }
    }
}

impl SceneLayer {
    pub fn new(layer_id: impl Into<String>, name: impl Into<String>, z_order: i32) -> Self {
        Self {
            layer_id: layer_id.into(),
            name: name.into(),
            z_order,
            ..Default::default()
        }
    }
}

impl StructuredDocument for SceneLayer {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_library_reference_wire_names() {
        let mut lib = LibraryReference::new("OpenSceneryX", "osx");
        lib.entry_count = 1200;
        lib.local_path = "Custom Scenery/OpenSceneryX".to_string();
        let doc = lib.to_document().unwrap();
        assert_eq!(doc["Library"], "OpenSceneryX");
        assert_eq!(doc["short-id"], "osx");
        assert_eq!(doc["entry-count"], 1200);
        assert_eq!(doc["local-path"], "Custom Scenery/OpenSceneryX");
    }

    #[test]
    fn test_asset_wire_names() {
        let asset = SceneAsset::new("gate_a1", 37.615, -122.39, 280.0).placed("osx", "terminals");
        let doc = asset.to_document().unwrap();
        assert_eq!(doc["associated-library"], "osx");
        assert_eq!(doc["layer-id"], "terminals");
        assert_eq!(doc["heading"], 280.0);
        assert!(doc.get("group-id").is_none());
        assert!(doc.get("other-properties").is_none());
    }

    #[test]
    fn test_asset_group_and_properties_emitted_when_set() {
        let mut asset = SceneAsset::new("gse_1", 0.0, 0.0, 0.0);
        asset.group_id = Some("apron_east".to_string());
        asset.other_properties.insert("vehicle_id", "GSE-1000");
        let doc = asset.to_document().unwrap();
        assert_eq!(doc["group-id"], "apron_east");
        assert_eq!(doc["other-properties"]["vehicle_id"], "GSE-1000");
    }

    #[test]
    fn test_asset_roundtrip() {
        let mut asset = SceneAsset::new("t1", 37.6, -122.4, 90.0).placed("sam", "base");
        asset.unique_id = "1a2b3c4d".to_string();
        asset.altitude = 4.5;
        asset.locked = true;
        asset.selected = true;
        asset.other_properties.insert("gates", 15);
        let back = SceneAsset::from_document(asset.to_document().unwrap()).unwrap();
        assert_eq!(back, asset);
    }

    #[test]
    fn test_layer_defaults() {
        let layer = SceneLayer::from_document(json!({"layer-id": "base"})).unwrap();
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.z_order, 0);
        assert!(layer.asset_ids.is_empty());
        assert!(!layer.hidden);
    }

    #[test]
    fn test_layer_asset_ids_keep_order() {
        let layer = SceneLayer::from_document(json!({
            "layer-id": "terminals",
            "asset-ids": ["t3", "t1", "t2", "t1"]
        }))
        .unwrap();
        assert_eq!(layer.asset_ids, vec!["t3", "t1", "t2", "t1"]);
    }

    #[test]
    fn test_layer_wire_names() {
        let mut layer = SceneLayer::new("jb", "Jetbridges", 3);
        layer.opacity = 0.5;
        layer.asset_ids.push("jb_1".to_string());
        let doc = layer.to_document().unwrap();
        assert_eq!(doc["z-order"], 3);
        assert_eq!(doc["asset-ids"], json!(["jb_1"]));
        assert_eq!(doc["opacity"], 0.5);
        assert!(doc.get("layer-properties").is_none());
    }

    #[test]
    fn test_camel_case_aliases() {
        let asset = SceneAsset::from_document(json!({
            "id": "a",
            "uniqueId": "0000beef",
            "associatedLibrary": "osx",
            "layerId": "base",
            "otherProperties": {"k": 1}
        }))
        .unwrap();
        assert_eq!(asset.unique_id, "0000beef");
        assert_eq!(asset.associated_library, "osx");
        assert_eq!(asset.other_properties.get("k"), Some(&json!(1)));
    }
}
