//! Validate command - report every broken rule in a document.

use std::path::Path;

use console::style;
use edx::{EdxConfig, RootDocument, ValidationMode, Violation};

use super::common::AnyDocument;
use crate::error::CliError;

/// Rule set for a run: `--strict` or the config's `strict` key enables strict mode.
pub fn mode_for(strict: bool, config: &EdxConfig) -> ValidationMode {
    if strict {
        ValidationMode::Strict
    } else {
        config.validation_mode()
    }
}

/// Collect the violations for a loaded document.
pub fn check(document: &AnyDocument, mode: ValidationMode) -> Vec<Violation> {
    match document {
        AnyDocument::Project(project) => project.validate_with(mode),
        AnyDocument::Library(library) => library.validate_with(mode),
    }
}

/// Run the validate command.
pub fn run(file: &Path, strict: bool, config: &EdxConfig) -> Result<(), CliError> {
    let document = AnyDocument::load(file)?;
    let mode = mode_for(strict, config);
    let violations = check(&document, mode);

    if violations.is_empty() {
        println!(
            "{} {} ({} rules: {:?})",
            style("✓").green().bold(),
            file.display(),
            document.kind().name(),
            mode
        );
        return Ok(());
    }

    println!(
        "{} {} has {} violation(s):",
        style("✗").red().bold(),
        file.display(),
        violations.len()
    );
    for violation in &violations {
        println!("  - {}", violation);
    }

    Err(CliError::Invalid {
        count: violations.len(),
    })
}
