//! Info command - print a short summary of a document.

use std::path::Path;

use console::style;
use edx::{EdxProject, LibraryFile};

use super::common::AnyDocument;
use crate::error::CliError;

/// Run the info command.
pub fn run(file: &Path) -> Result<(), CliError> {
    let summary = match AnyDocument::load(file)? {
        AnyDocument::Project(project) => describe_project(&project),
        AnyDocument::Library(library) => describe_library(&library),
    };
    println!("{}", style(file.display()).bold());
    print!("{}", summary);
    Ok(())
}

/// Summarize a project.
pub fn describe_project(project: &EdxProject) -> String {
    let info = &project.project;
    let airport = &project.airport;
    let mut out = String::new();

    out.push_str(&format!("Project:     {}\n", info.name));
    out.push_str(&format!("Author:      {}\n", info.author));
    out.push_str(&format!("Editor:      {}\n", info.editor_version));
    out.push_str(&format!(
        "Airport:     {} {}\n",
        airport.icao,
        airport.name
    ));
    out.push_str(&format!(
        "Datum:       {:.6}, {:.6}\n",
        airport.datum_lat, airport.datum_lon
    ));
    for (kind, frequency) in airport.frequencies() {
        out.push_str(&format!("  {:<10} {}\n", kind.to_string(), frequency));
    }
    out.push_str(&format!("Libraries:   {}\n", project.libraries.len()));
    out.push_str(&format!("Assets:      {}\n", project.assets.len()));
    out.push_str(&format!("Layers:      {}\n", project.layers.len()));
    out.push_str(&format!(
        "Edited:      {}\n",
        edx::timestamp::encode(&info.edit_date)
    ));
    out
}

/// Summarize a library.
pub fn describe_library(library: &LibraryFile) -> String {
    let meta = &library.library;
    let mut out = String::new();

    out.push_str(&format!("Library:     {} {}\n", meta.name, meta.version));
    out.push_str(&format!("Author:      {}\n", meta.author));
    out.push_str(&format!("Objects:     {}\n", library.object_count()));
    out.push_str(&format!(
        "Categories:  {}\n",
        join(library.categories().into_iter())
    ));
    out.push_str(&format!(
        "Asset types: {}\n",
        join(library.asset_types().into_iter())
    ));
    out.push_str(&format!(
        "Modified:    {}\n",
        edx::timestamp::encode(&meta.last_modified)
    ));
    out
}

fn join(values: impl Iterator<Item = String>) -> String {
    let values: Vec<String> = values.collect();
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
