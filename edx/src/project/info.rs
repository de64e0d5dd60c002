//! Project metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::StructuredDocument;
use crate::timestamp;

/// Metadata about a scenery project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,

    /// Version of the editor that last wrote the file.
    #[serde(rename = "editor-version", alias = "editorVersion")]
    pub editor_version: String,

    /// Target simulator version (e.g., "12.1.0").
    #[serde(rename = "XPlaneVersion", alias = "xplaneVersion")]
    pub xplane_version: String,

    pub author: String,

    #[serde(rename = "editdate", alias = "editDate", with = "timestamp::wire")]
    pub edit_date: DateTime<Utc>,

    #[serde(rename = "createdate", alias = "createDate", with = "timestamp::wire")]
    pub create_date: DateTime<Utc>,

    pub description: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        let now = timestamp::now();
        Self {
            name: String::new(),
            editor_version: String::new(),
            xplane_version: String::new(),
            author: String::new(),
            edit_date: now,
            create_date: now,
            description: String::new(),
        }
    }
}

impl ProjectInfo {
    /// Record an edit at `at`, never moving the edit date before creation.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.edit_date = at.max(self.create_date);
    }
}

impl StructuredDocument for ProjectInfo {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let info = ProjectInfo {
            name: "KSFO Rework".to_string(),
            editor_version: "0.0.3+42".to_string(),
            xplane_version: "12.1.0".to_string(),
            create_date: Utc.with_ymd_and_hms(2025, 5, 27, 8, 0, 0).unwrap(),
            edit_date: Utc.with_ymd_and_hms(2025, 7, 11, 17, 45, 30).unwrap(),
            ..Default::default()
        };
        let doc = info.to_document().unwrap();
        assert_eq!(doc["editor-version"], "0.0.3+42");
        assert_eq!(doc["XPlaneVersion"], "12.1.0");
        assert_eq!(doc["createdate"], "2025-05-27T08:00:00Z");
        assert_eq!(doc["editdate"], "2025-07-11T17:45:30Z");
    }

    #[test]
    fn test_camel_case_aliases() {
        let info = ProjectInfo::from_document(json!({
            "name": "Legacy",
            "editorVersion": "0.0.2",
            "createDate": "2025-01-01T00:00:00Z",
            "editDate": "2025-02-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(info.editor_version, "0.0.2");
        assert!(info.edit_date > info.create_date);
    }

    #[test]
    fn test_missing_dates_default_to_now() {
        let before = timestamp::now();
        let info = ProjectInfo::from_document(json!({"name": "x"})).unwrap();
        assert!(info.create_date >= before);
        assert!(info.edit_date >= before);
    }

    #[test]
    fn test_touch_clamps_to_create_date() {
        let mut info = ProjectInfo {
            create_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        };
        info.touch(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(info.edit_date, info.create_date);

        let later = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        info.touch(later);
        assert_eq!(info.edit_date, later);
    }
}
