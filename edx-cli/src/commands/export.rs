//! Export command - print a document as JSON text.

use std::path::Path;

use edx::RootDocument;

use super::common::AnyDocument;
use crate::error::CliError;

/// Render `document` in the canonical layout.
pub fn render(document: &AnyDocument, compact: bool) -> Result<String, CliError> {
    let text = match document {
        AnyDocument::Project(project) => project.to_text(!compact)?,
        AnyDocument::Library(library) => library.to_text(!compact)?,
    };
    Ok(text)
}

/// Run the export command.
pub fn run(file: &Path, compact: bool) -> Result<(), CliError> {
    let document = AnyDocument::load(file)?;
    println!("{}", render(&document, compact)?);
    Ok(())
}
