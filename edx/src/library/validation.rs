//! Business rules for library files.

use std::collections::HashSet;

use semver::Version;

use super::LibraryFile;
use crate::id::is_unique_id;
use crate::validate::{ValidationMode, Violation, ViolationCode as Code, Violations};

/// Check `file` against every library rule.
///
/// Duplicate detection keeps two independent sets (by ID and by unique ID)
/// filled in list order, so the first occurrence wins and each later repeat
/// is reported once.
pub(crate) fn validate(file: &LibraryFile, mode: ValidationMode) -> Vec<Violation> {
    let mut v = Violations::new();
    let library = &file.library;

    v.check(library.name.is_empty(), Code::LibraryNameEmpty, "Library name cannot be empty");
    v.check(
        library.version.is_empty(),
        Code::LibraryVersionEmpty,
        "Library version cannot be empty",
    );
    v.check(
        library.author.is_empty(),
        Code::LibraryAuthorEmpty,
        "Library author cannot be empty",
    );

    if mode == ValidationMode::Strict
        && !library.version.is_empty()
        && Version::parse(&library.version).is_err()
    {
        v.push(
            Code::LibraryVersionFormat,
            format!("Library version is not a semantic version: {}", library.version),
        );
    }

    let mut used_ids = HashSet::new();
    let mut used_unique_ids = HashSet::new();

    for obj in &file.objects {
        if obj.id.is_empty() {
            v.push(Code::ObjectIdEmpty, "Object ID cannot be empty");
        } else if !used_ids.insert(obj.id.as_str()) {
            v.push(Code::DuplicateObjectId, format!("Duplicate object ID: {}", obj.id));
        }

        if obj.unique_id.is_empty() {
            v.push(Code::ObjectUniqueIdEmpty, "Object unique ID cannot be empty");
        } else {
            if !used_unique_ids.insert(obj.unique_id.as_str()) {
                v.push(
                    Code::DuplicateObjectUniqueId,
                    format!("Duplicate object unique ID: {}", obj.unique_id),
                );
            }
            if mode == ValidationMode::Strict && !is_unique_id(&obj.unique_id) {
                v.push(
                    Code::ObjectUniqueIdFormat,
                    format!(
                        "Object unique ID must be 8 hexadecimal digits: {}",
                        obj.unique_id
                    ),
                );
            }
        }

        v.check(
            obj.asset_type.is_empty(),
            Code::ObjectAssetTypeEmpty,
            format!("Object asset type cannot be empty for object: {}", obj.id),
        );
        v.check(
            obj.name.is_empty(),
            Code::ObjectNameEmpty,
            format!("Object name cannot be empty for object: {}", obj.id),
        );
    }

    v.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootDocument;
    use crate::library::{Library, LibraryObject};

    fn valid_file() -> LibraryFile {
        let mut file = LibraryFile::new(Library::new("Airport Assets", "Jane", "1.0.0"));
        file.objects
            .push(LibraryObject::new("obj_001", "0000000a", "building", "Terminal"));
        file.objects
            .push(LibraryObject::new("obj_002", "0000000b", "vehicle", "Tug"));
        file
    }

    fn codes(violations: &[Violation]) -> Vec<Code> {
        violations.iter().map(|v| v.code).collect()
    }

    #[test]
    fn test_valid_file_has_no_violations() {
        let file = valid_file();
        assert!(file.validate().is_empty());
        assert!(file.validate_with(ValidationMode::Strict).is_empty());
        assert!(file.is_valid());
    }

    #[test]
    fn test_empty_metadata() {
        let file = LibraryFile::default();
        assert_eq!(
            codes(&file.validate()),
            vec![
                Code::LibraryNameEmpty,
                Code::LibraryVersionEmpty,
                Code::LibraryAuthorEmpty
            ]
        );
    }

    #[test]
    fn test_duplicate_id_reported_once_per_repeat() {
        let mut file = valid_file();
        file.objects
            .push(LibraryObject::new("obj_001", "0000000c", "building", "Copy"));
        let violations = file.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Duplicate object ID: obj_001");

        file.objects
            .push(LibraryObject::new("obj_001", "0000000d", "building", "Copy 2"));
        assert_eq!(file.validate().len(), 2);
    }

    #[test]
    fn test_duplicate_unique_id_independent_of_id() {
        let mut file = valid_file();
        file.objects
            .push(LibraryObject::new("obj_003", "0000000a", "building", "Clash"));
        let violations = file.validate();
        assert_eq!(codes(&violations), vec![Code::DuplicateObjectUniqueId]);
        assert_eq!(violations[0].message, "Duplicate object unique ID: 0000000a");
    }

    #[test]
    fn test_empty_object_fields_all_reported() {
        let mut file = valid_file();
        file.objects.push(LibraryObject::default());
        assert_eq!(
            codes(&file.validate()),
            vec![
                Code::ObjectIdEmpty,
                Code::ObjectUniqueIdEmpty,
                Code::ObjectAssetTypeEmpty,
                Code::ObjectNameEmpty
            ]
        );
    }

    #[test]
    fn test_empty_ids_are_not_duplicates() {
        let mut file = valid_file();
        file.objects.push(LibraryObject::new("", "", "building", "A"));
        file.objects.push(LibraryObject::new("", "", "building", "B"));
        let found = codes(&file.validate());
        assert!(!found.contains(&Code::DuplicateObjectId));
        assert!(!found.contains(&Code::DuplicateObjectUniqueId));
    }

    #[test]
    fn test_messages_name_the_object() {
        let mut file = valid_file();
        file.objects.push(LibraryObject::new("obj_009", "0000000f", "", ""));
        let messages: Vec<_> = file.validate().into_iter().map(|v| v.message).collect();
        assert_eq!(
            messages,
            vec![
                "Object asset type cannot be empty for object: obj_009",
                "Object name cannot be empty for object: obj_009"
            ]
        );
    }

    #[test]
    fn test_strict_version_format() {
        let mut file = valid_file();
        file.library.version = "v2".to_string();
        assert!(file.validate().is_empty());
        assert_eq!(
            codes(&file.validate_with(ValidationMode::Strict)),
            vec![Code::LibraryVersionFormat]
        );
    }

    #[test]
    fn test_strict_unique_id_format() {
        let mut file = valid_file();
        file.objects[0].unique_id = "OBJ-1".to_string();
        assert!(file.validate().is_empty());
        assert_eq!(
            codes(&file.validate_with(ValidationMode::Strict)),
            vec![Code::ObjectUniqueIdFormat]
        );
    }
}
