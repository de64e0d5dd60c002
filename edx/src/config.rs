//! User configuration stored in `~/.edx/config.ini`.
//!
//! ```ini
//! [general]
//! author = Jane Doe
//!
//! [validation]
//! strict = false
//! validate_on_save = true
//!
//! [logging]
//! level = info
//! directory = /home/jane/.edx/logs
//! ```
//!
//! A missing file is not an error; every key has a default.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::validate::ValidationMode;

const SECTION_GENERAL: &str = "general";
const SECTION_VALIDATION: &str = "validation";
const SECTION_LOGGING: &str = "logging";

/// Default log level when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {section}.{key}: expected true or false")]
    InvalidBool {
        section: &'static str,
        key: &'static str,
        value: String,
    },

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g., "info", "edx=debug").
    pub level: String,

    /// Directory for the log file. `None` logs to stderr only.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: None,
        }
    }
}

/// Effective edX settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdxConfig {
    /// Author stamped into newly created documents when none is given.
    pub author: String,

    /// Apply strict rules in addition to the baseline ones.
    pub strict: bool,

    /// Refuse to save documents that fail validation.
    pub validate_on_save: bool,

    pub logging: LoggingConfig,
}

impl Default for EdxConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            strict: false,
            validate_on_save: true,
            logging: LoggingConfig::default(),
        }
    }
}

/// Directory holding edX user state (`~/.edx`).
pub fn config_directory() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".edx"))
        .ok_or(ConfigError::NoHomeDir)
}

/// Location of the user configuration file.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_directory()?.join("config.ini"))
}

impl EdxConfig {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        let get = |section: &str, key: &str| {
            ini.section(Some(section))
                .and_then(|s| s.get(key))
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(author) = get(SECTION_GENERAL, "author") {
            config.author = author.to_string();
        }
        if let Some(value) = get(SECTION_VALIDATION, "strict") {
            config.strict = parse_bool(SECTION_VALIDATION, "strict", value)?;
        }
        if let Some(value) = get(SECTION_VALIDATION, "validate_on_save") {
            config.validate_on_save = parse_bool(SECTION_VALIDATION, "validate_on_save", value)?;
        }
        if let Some(level) = get(SECTION_LOGGING, "level") {
            config.logging.level = level.to_string();
        }
        if let Some(dir) = get(SECTION_LOGGING, "directory") {
            config.logging.directory = Some(PathBuf::from(dir));
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write to the default location, creating `~/.edx` if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.save_to(&path)
    }

    /// Write to `path`. The parent directory must exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.with_section(Some(SECTION_GENERAL))
            .set("author", self.author.as_str());
        ini.with_section(Some(SECTION_VALIDATION))
            .set("strict", self.strict.to_string())
            .set("validate_on_save", self.validate_on_save.to_string());
        ini.with_section(Some(SECTION_LOGGING))
            .set("level", self.logging.level.as_str());
        if let Some(dir) = &self.logging.directory {
            ini.with_section(Some(SECTION_LOGGING))
                .set("directory", dir.to_string_lossy());
        }

        ini.write_to_file(path).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rule set selected by the `strict` flag.
    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Baseline
        }
    }

    /// Set the default author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Enable or disable strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable validation before save.
    pub fn with_validate_on_save(mut self, validate: bool) -> Self {
        self.validate_on_save = validate;
        self
    }

    /// Set the log filter directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the log file directory.
    pub fn with_log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logging.directory = Some(dir.into());
        self
    }
}

fn parse_bool(section: &'static str, key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            section,
            key,
            value: value.to_string(),
        }),
    }
}
