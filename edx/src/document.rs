//! Serialization contract and root-document lifecycle.
//!
//! Every entity implements [`StructuredDocument`], which maps it to and from a
//! generic JSON tree. Missing keys never fail a conversion: each field falls
//! back to its typed default. Only a present key of the wrong type (or a
//! malformed timestamp) is rejected.
//!
//! The two root documents additionally implement [`RootDocument`], which adds
//! validation, text import/export, and file I/O on top of the contract.

use std::path::Path;

use serde::de::{self, DeserializeOwned};
use serde::{ser, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::{EdxError, EdxResult};
use crate::io;
use crate::timestamp;
use crate::validate::{ValidationMode, Violation};

/// Indentation used for pretty-printed documents.
pub const INDENT: &[u8] = b"    ";

/// Bidirectional mapping between an entity and a JSON tree.
pub trait StructuredDocument: Serialize + DeserializeOwned {
    /// Convert to a JSON tree using the entity's wire names.
    fn to_document(&self) -> EdxResult<Value> {
        serde_json::to_value(self).map_err(EdxError::Document)
    }

    /// Populate from a JSON tree, defaulting every absent key.
    fn from_document(value: Value) -> EdxResult<Self> {
        serde_json::from_value(value).map_err(EdxError::Document)
    }
}

/// A top-level serializable unit with its own load/save/validate lifecycle.
pub trait RootDocument: StructuredDocument {
    /// Short noun used in log lines and error messages.
    const KIND: &'static str;

    /// Collect every violation under the given rule set.
    fn validate_with(&self, mode: ValidationMode) -> Vec<Violation>;

    /// Collect every baseline violation.
    fn validate(&self) -> Vec<Violation> {
        self.validate_with(ValidationMode::Baseline)
    }

    /// True when [`validate`](Self::validate) reports nothing.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Render as JSON text; `pretty` selects the 4-space indented form.
    fn to_text(&self, pretty: bool) -> EdxResult<String> {
        let value = self.to_document()?;
        let bytes = render(&value, pretty)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Parse JSON text into a document.
    ///
    /// Text whose top level is not a JSON object is a parse error.
    fn from_text(text: &str) -> EdxResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(EdxError::ParseText)?;
        require_object_root(&value).map_err(EdxError::ParseText)?;
        Self::from_document(value)
    }

    /// Rules that must hold for the document to be written at all.
    ///
    /// Unlike [`validate`](Self::validate), a non-empty result makes
    /// [`save`](Self::save) fail.
    fn save_violations(&self) -> Vec<Violation> {
        Vec::new()
    }

    /// Write to `path`, truncating or creating the file.
    ///
    /// Fails without touching the file if
    /// [`save_violations`](Self::save_violations) reports anything or a
    /// number field is NaN or infinite.
    fn save(&self, path: impl AsRef<Path>) -> EdxResult<()> {
        io::save(self, path.as_ref())
    }

    /// Read from `path`. The result is not validated.
    fn load(path: impl AsRef<Path>) -> EdxResult<Self> {
        io::load(path.as_ref())
    }
}

/// Serialize an `f64`, refusing NaN and infinities.
///
/// JSON has no spelling for non-finite numbers; plain serde_json would
/// write `null`, which no longer loads as a number.
pub(crate) fn finite<S: ser::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(ser::Error::custom(format!(
            "non-finite number {} cannot be written as JSON",
            value
        )))
    }
}

/// Fail unless `value` is a JSON object.
pub(crate) fn require_object_root(value: &Value) -> Result<(), serde_json::Error> {
    if value.is_object() {
        Ok(())
    } else {
        Err(de::Error::custom(format!(
            "expected a JSON object at the document root, found {}",
            json_type(value)
        )))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Expected layout of a root document's top level.
///
/// serde's derived visitors also accept arrays positionally, so every entity
/// position is checked to hold an object before the tree is deserialized.
pub(crate) struct RootShape {
    /// Keys whose value must be an object.
    pub objects: &'static [&'static str],
    /// Keys whose value must be an array of objects.
    pub lists: &'static [&'static str],
    /// `(section, field)` pairs holding timestamps.
    pub timestamps: &'static [(&'static str, &'static str)],
}

impl RootShape {
    /// Check the layout, then deserialize.
    ///
    /// A malformed timestamp string is reported as [`EdxError::Format`];
    /// every other mismatch is [`EdxError::Document`].
    pub fn decode<D: DeserializeOwned>(&self, value: Value) -> EdxResult<D> {
        self.check(&value)?;
        serde_json::from_value(value).map_err(EdxError::Document)
    }

    fn check(&self, value: &Value) -> EdxResult<()> {
        require_object_root(value).map_err(EdxError::Document)?;

        for key in self.objects {
            if let Some(entity) = value.get(*key) {
                if !entity.is_object() {
                    return Err(shape_error(key, entity));
                }
            }
        }

        for key in self.lists {
            match value.get(*key) {
                Some(Value::Array(items)) => {
                    if let Some(item) = items.iter().find(|item| !item.is_object()) {
                        return Err(shape_error(key, item));
                    }
                }
                Some(other) => {
                    return Err(EdxError::Document(de::Error::custom(format!(
                        "expected an array for '{}', found {}",
                        key,
                        json_type(other)
                    ))))
                }
                None => {}
            }
        }

        for (section, field) in self.timestamps {
            let raw = value.get(*section).and_then(|s| s.get(*field));
            if let Some(Value::String(text)) = raw {
                timestamp::decode(text)?;
            }
        }

        Ok(())
    }
}

fn shape_error(key: &str, found: &Value) -> EdxError {
    EdxError::Document(de::Error::custom(format!(
        "expected an object for '{}', found {}",
        key,
        json_type(found)
    )))
}

/// Serialize a JSON tree to bytes.
pub(crate) fn render(value: &Value, pretty: bool) -> EdxResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(4096);
    if pretty {
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut ser).map_err(EdxError::Document)?;
    } else {
        serde_json::to_writer(&mut buf, value).map_err(EdxError::Document)?;
    }
    Ok(buf)
}
