//! New-project and new-library commands.

use std::path::Path;

use console::style;
use edx::{EdxConfig, EdxManager, RootDocument};
use tracing::info;

use super::common::ensure_writable;
use crate::error::CliError;

/// Options for `new-project`.
#[derive(Debug, Clone)]
pub struct NewProject<'a> {
    pub file: &'a Path,
    pub name: &'a str,
    pub author: &'a str,
    pub icao: Option<&'a str>,
    pub force: bool,
}

/// Options for `new-library`.
#[derive(Debug, Clone)]
pub struct NewLibrary<'a> {
    pub file: &'a Path,
    pub name: &'a str,
    pub author: &'a str,
    pub version: &'a str,
    pub force: bool,
}

/// Write a skeleton project.
///
/// The skeleton is written even if it does not yet pass validation (a
/// project without an ICAO code, for instance); remaining violations are
/// listed so the user knows what to fill in.
pub fn run_project(args: NewProject<'_>, config: &EdxConfig) -> Result<(), CliError> {
    ensure_writable(args.file, args.force)?;

    let manager = EdxManager::with_config(config.clone());
    let project = manager.create_project(args.name, args.author, args.icao);
    project.save(args.file)?;
    info!(path = %args.file.display(), "Wrote new project");

    println!("{} Created {}", style("✓").green().bold(), args.file.display());
    report_pending(&edx::validate::messages(&project.validate()));
    Ok(())
}

/// Write an empty library.
pub fn run_library(args: NewLibrary<'_>, config: &EdxConfig) -> Result<(), CliError> {
    ensure_writable(args.file, args.force)?;

    let manager = EdxManager::with_config(config.clone());
    let library = manager.create_library(args.name, args.author, args.version);
    library.save(args.file)?;
    info!(path = %args.file.display(), "Wrote new library");

    println!("{} Created {}", style("✓").green().bold(), args.file.display());
    report_pending(&edx::validate::messages(&library.validate()));
    Ok(())
}

fn report_pending(messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    println!("{}", style("Still to fill in:").yellow());
    for message in messages {
        println!("  - {}", message);
    }
}
