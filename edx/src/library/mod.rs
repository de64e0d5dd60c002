//! Library files: reusable asset catalogs.
//!
//! A [`LibraryFile`] is one of the two root document types. It owns a single
//! [`Library`] metadata record and an ordered list of [`LibraryObject`]
//! entries whose `id` and `unique_id` values must each be unique.
//!
//! # Wire Format
//!
//! ```text
//! {
//!     "Library": { "name", "path", "version", "author", "git-repository",
//!                  "size-mb", "description", "last-modified" },
//!     "Objects": [ { "id", "unique-id", "asset-type", "name", "description",
//!                    "category", "tags", "object-path", "texture-path",
//!                    "preview-image", "properties"? } ]
//! }
//! ```
//!
//! Conventional extensions are `.edxlib` and `.lib`; neither is enforced.

mod file;
mod types;
mod validation;

pub use file::LibraryFile;
pub use types::{Library, LibraryObject};
