//! edX CLI - Command-line interface
//!
//! Validate, inspect, create, and export edX project and library files.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use console::style;
use edx::manager::DEFAULT_LIBRARY_VERSION;
use edx::EdxConfig;
use tracing::debug;

use commands::config::ConfigCommands;
use commands::create::{NewLibrary, NewProject};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "edx")]
#[command(version, about = "Tools for edX scenery project and library files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a project or library file against the validation rules
    Validate {
        /// File to check (.edx project or .edxlib library)
        file: PathBuf,

        /// Also apply referential-integrity and format rules
        #[arg(long)]
        strict: bool,
    },

    /// Print a summary of a project or library file
    Info {
        /// File to describe
        file: PathBuf,
    },

    /// Create a new project file
    NewProject {
        /// Output file
        file: PathBuf,

        /// Project name
        #[arg(long)]
        name: String,

        /// Author (defaults to general.author from config)
        #[arg(long, default_value = "")]
        author: String,

        /// Four-letter ICAO airport code
        #[arg(long)]
        icao: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Create a new, empty library file
    NewLibrary {
        /// Output file
        file: PathBuf,

        /// Library name
        #[arg(long)]
        name: String,

        /// Author (defaults to general.author from config)
        #[arg(long, default_value = "")]
        author: String,

        /// Library version
        #[arg(long = "version", value_name = "VERSION", default_value = DEFAULT_LIBRARY_VERSION)]
        lib_version: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a file in the canonical JSON layout
    Export {
        /// File to export
        file: PathBuf,

        /// Single-line output instead of 4-space indentation
        #[arg(long)]
        compact: bool,
    },

    /// View configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match EdxConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}; using defaults", style("warning:").yellow(), e);
            EdxConfig::default()
        }
    };

    // Held until exit so buffered log lines reach the file.
    let _log_guard = match edx::logging::init(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{} {}", style("warning:").yellow(), e);
            None
        }
    };
    debug!(?cli, "Parsed arguments");

    if let Err(e) = run(cli.command, &config) {
        if !matches!(e, CliError::Invalid { .. }) {
            eprintln!("{} {}", style("error:").red().bold(), e);
        }
        process::exit(e.exit_code());
    }
}

fn run(command: Commands, config: &EdxConfig) -> Result<(), CliError> {
    match command {
        Commands::Validate { file, strict } => commands::validate::run(&file, strict, config),
        Commands::Info { file } => commands::info::run(&file),
        Commands::NewProject {
            file,
            name,
            author,
            icao,
            force,
        } => commands::create::run_project(
            NewProject {
                file: &file,
                name: &name,
                author: &author,
                icao: icao.as_deref(),
                force,
            },
            config,
        ),
        Commands::NewLibrary {
            file,
            name,
            author,
            lib_version,
            force,
        } => commands::create::run_library(
            NewLibrary {
                file: &file,
                name: &name,
                author: &author,
                version: &lib_version,
                force,
            },
            config,
        ),
        Commands::Export { file, compact } => commands::export::run(&file, compact),
        Commands::Config { command } => commands::config::run(command, config),
    }
}
