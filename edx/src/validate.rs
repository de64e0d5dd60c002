//! Validation result types shared by both root documents.
//!
//! Validators never short-circuit: every broken rule contributes one
//! [`Violation`], so a caller can report everything wrong in a single pass.
//! The rules themselves live next to the documents they check
//! (`project::validation`, `library::validation`).

use std::fmt;
use std::ops::RangeInclusive;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Which rule set to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Structural and range rules only.
    #[default]
    Baseline,
    /// Baseline plus referential-integrity and format checks.
    Strict,
}

/// Machine-readable identifier for each validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    // Project rules
    ProjectNameEmpty,
    EditorVersionEmpty,
    IcaoEmpty,
    IcaoLength,
    AirportLatitudeRange,
    AirportLongitudeRange,
    LibraryReferenceNameEmpty,
    LibraryReferenceShortIdEmpty,
    AssetIdEmpty,
    AssetLatitudeRange,
    AssetLongitudeRange,
    AssetHeadingRange,

    // Project rules (strict)
    DuplicateAssetId,
    DuplicateAssetUniqueId,
    UnknownAssetLibrary,
    UnknownAssetLayer,
    UnknownLayerAsset,
    LayerOpacityRange,
    EditBeforeCreate,

    // Library rules
    LibraryNameEmpty,
    LibraryVersionEmpty,
    LibraryAuthorEmpty,
    ObjectIdEmpty,
    DuplicateObjectId,
    ObjectUniqueIdEmpty,
    DuplicateObjectUniqueId,
    ObjectAssetTypeEmpty,
    ObjectNameEmpty,

    // Library rules (strict)
    LibraryVersionFormat,
    ObjectUniqueIdFormat,
}

/// One broken validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which rule was broken.
    pub code: ViolationCode,
    /// Human-readable description naming the offending entity.
    pub message: String,
}

impl Violation {
    /// Create a violation with the given code and message.
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collects violations in rule order.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: ViolationCode, message: impl Into<String>) {
        self.0.push(Violation::new(code, message));
    }

    pub fn check(&mut self, failed: bool, code: ViolationCode, message: impl Into<String>) {
        if failed {
            self.push(code, message);
        }
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

/// True when `value` lies in `range`. `NaN` is never in range.
pub(crate) fn in_range(value: f64, range: &RangeInclusive<f64>) -> bool {
    range.contains(&value)
}

/// True when `heading` lies in `[0, 360)`.
pub(crate) fn valid_heading(heading: f64) -> bool {
    (0.0..360.0).contains(&heading)
}

/// Render violations as plain strings.
pub fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.message.clone()).collect()
}
