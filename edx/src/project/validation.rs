//! Business rules for project files.

use std::collections::HashSet;

use super::EdxProject;
use crate::validate::{
    in_range, valid_heading, ValidationMode, Violation, ViolationCode as Code, Violations,
    LATITUDE_RANGE, LONGITUDE_RANGE,
};

/// Required ICAO code length.
pub const ICAO_LEN: usize = 4;

pub(crate) const EDIT_BEFORE_CREATE: &str = "Project edit date is before its create date";

/// Check `project` against every project rule.
pub(crate) fn validate(project: &EdxProject, mode: ValidationMode) -> Vec<Violation> {
    let mut v = Violations::new();

    let info = &project.project;
    v.check(info.name.is_empty(), Code::ProjectNameEmpty, "Project name cannot be empty");
    v.check(
        info.editor_version.is_empty(),
        Code::EditorVersionEmpty,
        "Editor version cannot be empty",
    );

    // An empty code is reported as both empty and the wrong length.
    let airport = &project.airport;
    v.check(
        airport.icao.is_empty(),
        Code::IcaoEmpty,
        "Airport ICAO code cannot be empty",
    );
    v.check(
        airport.icao.chars().count() != ICAO_LEN,
        Code::IcaoLength,
        "Airport ICAO code must be 4 characters",
    );
    v.check(
        !in_range(airport.datum_lat, &LATITUDE_RANGE),
        Code::AirportLatitudeRange,
        "Airport latitude must be between -90 and 90 degrees",
    );
    v.check(
        !in_range(airport.datum_lon, &LONGITUDE_RANGE),
        Code::AirportLongitudeRange,
        "Airport longitude must be between -180 and 180 degrees",
    );

    for (index, lib) in project.libraries.iter().enumerate() {
        v.check(
            lib.name.is_empty(),
            Code::LibraryReferenceNameEmpty,
            format!("Library name cannot be empty for library reference #{}", index),
        );
        v.check(
            lib.short_id.is_empty(),
            Code::LibraryReferenceShortIdEmpty,
            format!("Library short-id cannot be empty for library reference #{}", index),
        );
    }

    for asset in &project.assets {
        v.check(asset.id.is_empty(), Code::AssetIdEmpty, "Asset ID cannot be empty");
        v.check(
            !in_range(asset.latitude, &LATITUDE_RANGE),
            Code::AssetLatitudeRange,
            format!(
                "Asset latitude must be between -90 and 90 degrees for asset: {}",
                asset.id
            ),
        );
        v.check(
            !in_range(asset.longitude, &LONGITUDE_RANGE),
            Code::AssetLongitudeRange,
            format!(
                "Asset longitude must be between -180 and 180 degrees for asset: {}",
                asset.id
            ),
        );
        v.check(
            !valid_heading(asset.heading),
            Code::AssetHeadingRange,
            format!(
                "Asset heading must be between 0 and 360 degrees for asset: {}",
                asset.id
            ),
        );
    }

    if mode == ValidationMode::Strict {
        check_references(project, &mut v);
    }

    v.into_vec()
}

/// Referential-integrity and consistency rules applied only in strict mode.
fn check_references(project: &EdxProject, v: &mut Violations) {
    let info = &project.project;
    v.check(
        info.edit_date < info.create_date,
        Code::EditBeforeCreate,
        EDIT_BEFORE_CREATE,
    );

    let mut used_ids = HashSet::new();
    let mut used_unique_ids = HashSet::new();
    for asset in &project.assets {
        if !asset.id.is_empty() && !used_ids.insert(asset.id.as_str()) {
            v.push(Code::DuplicateAssetId, format!("Duplicate asset ID: {}", asset.id));
        }
        if !asset.unique_id.is_empty() && !used_unique_ids.insert(asset.unique_id.as_str()) {
            v.push(
                Code::DuplicateAssetUniqueId,
                format!("Duplicate asset unique ID: {}", asset.unique_id),
            );
        }
        if !asset.associated_library.is_empty()
            && project.find_library(&asset.associated_library).is_none()
        {
            v.push(
                Code::UnknownAssetLibrary,
                format!(
                    "Asset {} references unknown library: {}",
                    asset.id, asset.associated_library
                ),
            );
        }
        if !asset.layer_id.is_empty() && project.find_layer(&asset.layer_id).is_none() {
            v.push(
                Code::UnknownAssetLayer,
                format!(
                    "Asset {} references unknown layer: {}",
                    asset.id, asset.layer_id
                ),
            );
        }
    }

    for layer in &project.layers {
        v.check(
            !in_range(layer.opacity, &(0.0..=1.0)),
            Code::LayerOpacityRange,
            format!(
                "Layer opacity must be between 0 and 1 for layer: {}",
                layer.layer_id
            ),
        );
        for asset_id in &layer.asset_ids {
            if !used_ids.contains(asset_id.as_str()) {
                v.push(
                    Code::UnknownLayerAsset,
                    format!("Layer {} lists unknown asset: {}", layer.layer_id, asset_id),
                );
            }
        }
    }
}
