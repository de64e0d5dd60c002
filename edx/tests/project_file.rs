//! File-level behaviour of project documents.

use std::fs;

use edx::{
    AirportInfo, EdxError, EdxProject, Frequency, FrequencyKind, LibraryReference, RootDocument,
    SceneAsset, SceneLayer, ViolationCode,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn sample_project() -> EdxProject {
    let mut project = EdxProject::default();
    project.project.name = "Frankfurt".to_string();
    project.project.editor_version = "0.0.3+42".to_string();
    project.project.author = "Jane Doe".to_string();

    project.airport = AirportInfo::with_icao("EDDF");
    project.airport.name = "Frankfurt am Main".to_string();
    project.airport.datum_lat = 50.0333;
    project.airport.datum_lon = 8.5706;
    project.airport.elevation = 364;
    project
        .airport
        .set_frequency(FrequencyKind::Tower, Some(Frequency::from_mhz(119.9)));

    let mut reference = LibraryReference::new("OpenSceneryX", "osx");
    reference.entry_count = 1250;
    project.libraries.push(reference);

    let mut layer = SceneLayer::new("terminal", "Terminal Area", 1);
    layer.asset_ids.push("gate_a1".to_string());
    project.layers.push(layer);

    let mut asset = SceneAsset::new("gate_a1", 50.0498, 8.5731, 270.0).placed("osx", "terminal");
    asset.unique_id = "0a1b2c3d".to_string();
    asset.group_id = Some("gates".to_string());
    asset.other_properties.insert("jetway", true);
    project.assets.push(asset);

    project
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_save_then_load_is_identity() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("eddf.edx");
    let project = sample_project();
    assert!(project.is_valid());

    project.save(&path).unwrap();
    let loaded = EdxProject::load(&path).unwrap();
    assert_eq!(loaded, project);
    assert_eq!(
        loaded.airport.frequency(FrequencyKind::Tower),
        Some(Frequency::from_mhz(119.9))
    );
    assert!(loaded.airport.frequency(FrequencyKind::Atis).is_none());
}

#[test]
fn test_saved_file_uses_wire_layout() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("eddf.edx");
    sample_project().save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"Project\": {\n        \"name\""));
    assert!(text.ends_with("}\n"));

    let doc = read_json(&path);
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["Project", "Airport", "Libraries", "Assets", "Layers"]);
    assert_eq!(doc["Airport"]["ICAO"], "EDDF");
    assert_eq!(doc["Airport"]["Tower"], 119.9);
    assert!(doc["Airport"].get("ATIS").is_none());
    assert_eq!(doc["Assets"][0]["group-id"], "gates");
    assert_eq!(doc["Assets"][0]["other-properties"], json!({"jetway": true}));
    assert_eq!(doc["Layers"][0]["asset-ids"], json!(["gate_a1"]));
    assert_eq!(doc["Libraries"][0]["short-id"], "osx");
}

#[test]
fn test_timestamps_written_in_utc_layout() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dates.edx");
    let mut project = sample_project();
    project.project.create_date = edx::timestamp::decode("2025-07-11T08:30:00Z").unwrap();
    project.project.edit_date = edx::timestamp::decode("2025-07-12T09:00:05Z").unwrap();
    project.save(&path).unwrap();

    let doc = read_json(&path);
    assert_eq!(doc["Project"]["createdate"], "2025-07-11T08:30:00Z");
    assert_eq!(doc["Project"]["editdate"], "2025-07-12T09:00:05Z");
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = EdxProject::load(temp.path().join("absent.edx")).unwrap_err();
    assert!(matches!(err, EdxError::NotFound { .. }));
}

#[test]
fn test_load_malformed_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.edx");
    fs::write(&path, "not json").unwrap();

    let err = EdxProject::load(&path).unwrap_err();
    assert!(matches!(err, EdxError::Parse { .. }));
}

#[test]
fn test_load_wrong_types_is_document_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.edx");
    fs::write(&path, r#"{"Airport": {"DatumLat": "north"}}"#).unwrap();

    let err = EdxProject::load(&path).unwrap_err();
    assert!(matches!(err, EdxError::Document(_)));
}

#[test]
fn test_load_malformed_timestamp_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dates.edx");
    fs::write(&path, r#"{"Project": {"createdate": "yesterday"}}"#).unwrap();

    let err = EdxProject::load(&path).unwrap_err();
    assert!(matches!(err, EdxError::Format(_)), "{err:?}");
}

#[test]
fn test_load_non_object_root_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("root.edx");

    for text in ["[]", "3", "null", "\"not json\"", r#"[{"name": "x"}, {"ICAO": "EDDF"}]"#] {
        fs::write(&path, text).unwrap();
        let err = EdxProject::load(&path).unwrap_err();
        assert!(matches!(err, EdxError::Parse { .. }), "{text}: {err:?}");
    }
}

#[test]
fn test_from_text_non_object_root_is_parse_error() {
    for text in ["[]", "true", r#"[{"name": "Positional"}, {"ICAO": "EDDF"}]"#] {
        let err = EdxProject::from_text(text).unwrap_err();
        assert!(matches!(err, EdxError::ParseText(_)), "{text}: {err:?}");
    }
}

#[test]
fn test_sections_must_be_objects() {
    for text in [
        r#"{"Project": ["Frankfurt"]}"#,
        r#"{"Airport": "EDDF"}"#,
        r#"{"Assets": [[]]}"#,
        r#"{"layers": {"base": {}}}"#,
    ] {
        let err = EdxProject::from_text(text).unwrap_err();
        assert!(matches!(err, EdxError::Document(_)), "{text}: {err:?}");
    }
}

#[test]
fn test_non_finite_numbers_are_not_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nan.edx");

    let mut project = sample_project();
    project.assets.push(SceneAsset::new("bad", f64::NAN, 8.57, 0.0));
    let err = project.save(&path).unwrap_err();
    assert!(matches!(err, EdxError::Document(_)), "{err:?}");
    assert!(!path.exists());
    assert!(project.to_text(false).is_err());

    let mut project = sample_project();
    project
        .airport
        .set_frequency(FrequencyKind::Ground, Some(Frequency::from_mhz(f64::INFINITY)));
    assert!(matches!(project.save(&path), Err(EdxError::Document(_))));
    assert!(!path.exists());

    let mut project = sample_project();
    project.airport.datum_lat = f64::NEG_INFINITY;
    assert!(project.to_text(true).is_err());
}

#[test]
fn test_save_rejects_edit_before_create() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dates.edx");
    let mut project = sample_project();
    project.project.create_date = edx::timestamp::decode("2025-07-12T09:00:00Z").unwrap();
    project.project.edit_date = edx::timestamp::decode("2025-07-11T09:00:00Z").unwrap();

    let err = project.save(&path).unwrap_err();
    let codes: Vec<_> = err.violations().iter().map(|v| v.code).collect();
    assert_eq!(codes, vec![ViolationCode::EditBeforeCreate]);
    assert!(!path.exists());

    project.project.edit_date = project.project.create_date;
    project.save(&path).unwrap();
    assert_eq!(EdxProject::load(&path).unwrap(), project);
}

#[test]
fn test_incomplete_file_loads_with_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("partial.edx");
    fs::write(&path, r#"{"Project": {"name": "Partial"}}"#).unwrap();

    let project = EdxProject::load(&path).unwrap();
    assert_eq!(project.project.name, "Partial");
    assert_eq!(project.airport.transition_altitude, 18000);
    assert_eq!(project.airport.transition_level, "FL180");
    assert!(project.assets.is_empty());

    let codes: Vec<_> = project.validate().into_iter().map(|v| v.code).collect();
    assert_eq!(
        codes,
        vec![
            ViolationCode::EditorVersionEmpty,
            ViolationCode::IcaoEmpty,
            ViolationCode::IcaoLength
        ]
    );
}

#[test]
fn test_camel_case_file_loads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("camel.edx");
    let doc = json!({
        "project": {
            "name": "Camel",
            "editorVersion": "0.0.3+42",
            "createDate": "2025-01-01T00:00:00Z",
            "editDate": "2025-01-02T00:00:00Z"
        },
        "airport": { "icao": "KJFK", "datumLat": 40.64, "datumLon": -73.78 },
        "libraries": [ { "name": "Lib", "shortId": "lib" } ],
        "assets": [ {
            "id": "a1",
            "uniqueId": "deadbeef",
            "latitude": 40.6,
            "longitude": -73.7,
            "associatedLibrary": "lib",
            "layerId": "base"
        } ],
        "layers": [ { "layerId": "base", "name": "Base", "assetIds": ["a1"] } ]
    });
    fs::write(&path, doc.to_string()).unwrap();

    let project = EdxProject::load(&path).unwrap();
    assert_eq!(project.project.editor_version, "0.0.3+42");
    assert_eq!(project.airport.icao, "KJFK");
    assert_eq!(project.libraries[0].short_id, "lib");
    assert_eq!(project.assets[0].unique_id, "deadbeef");
    assert_eq!(project.layers[0].asset_ids, vec!["a1"]);
    assert!(project.validate_with(edx::ValidationMode::Strict).is_empty());

    // Re-saved in the canonical layout.
    let out = temp.path().join("canonical.edx");
    project.save(&out).unwrap();
    let doc = read_json(&out);
    assert!(doc.get("Project").is_some());
    assert!(doc.get("project").is_none());
    assert_eq!(doc["Assets"][0]["unique-id"], "deadbeef");
}

#[test]
fn test_save_to_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no-such-dir").join("p.edx");

    let err = sample_project().save(&path).unwrap_err();
    assert!(matches!(err, EdxError::WriteFailed { .. }));
    assert!(!path.exists());
    assert!(!temp.path().join("no-such-dir").exists());
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("p.edx");
    fs::write(&path, "old contents that are much longer than needed ".repeat(500)).unwrap();

    let project = sample_project();
    project.save(&path).unwrap();
    assert_eq!(EdxProject::load(&path).unwrap(), project);
}

#[test]
fn test_settings_bag_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.edx");
    let mut project = sample_project();
    project.settings.insert("grid", json!({"snap": true, "size": 5}));
    project.save(&path).unwrap();

    assert_eq!(read_json(&path)["Settings"]["grid"]["size"], 5);
    assert_eq!(EdxProject::load(&path).unwrap(), project);
}

#[test]
fn test_text_export_import() {
    let project = sample_project();
    let compact = project.to_text(false).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(EdxProject::from_text(&compact).unwrap(), project);

    let pretty = project.to_text(true).unwrap();
    assert!(pretty.contains("\n    \"Airport\": {\n        \"Name\""));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_coordinates_survive_save_and_load(
            datum_lat in -90.0f64..90.0,
            latitude in -90.0f64..90.0,
            longitude in -180.0f64..180.0,
            heading in 0.0f64..360.0,
            mhz in 108.0f64..137.0,
        ) {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("precise.edx");

            let mut project = sample_project();
            project.airport.datum_lat = datum_lat;
            project
                .airport
                .set_frequency(FrequencyKind::Approach, Some(Frequency::from_mhz(mhz)));
            project.assets[0].latitude = latitude;
            project.assets[0].longitude = longitude;
            project.assets[0].heading = heading;
            project.save(&path).unwrap();

            let loaded = EdxProject::load(&path).unwrap();
            let asset = &loaded.assets[0];
            prop_assert_eq!(loaded.airport.datum_lat.to_bits(), datum_lat.to_bits());
            prop_assert_eq!(asset.latitude.to_bits(), latitude.to_bits());
            prop_assert_eq!(asset.longitude.to_bits(), longitude.to_bits());
            prop_assert_eq!(asset.heading.to_bits(), heading.to_bits());
            let approach = loaded.airport.frequency(FrequencyKind::Approach).unwrap();
            prop_assert_eq!(approach.mhz().to_bits(), mhz.to_bits());

            let text = project.to_text(false).unwrap();
            prop_assert_eq!(EdxProject::from_text(&text).unwrap(), project);
        }
    }
}
