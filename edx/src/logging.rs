//! Tracing subscriber setup for binaries.
//!
//! The library itself only emits `tracing` events; a binary calls [`init`]
//! once at startup and keeps the returned [`LoggingGuard`] alive until exit
//! so the file writer can flush.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Name of the log file inside the configured directory.
pub const LOG_FILE_NAME: &str = "edx.log";

/// Errors installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{level}': {source}")]
    Filter {
        level: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to create log directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialised: {0}")]
    AlreadyInitialised(#[from] TryInitError),
}

/// Keeps the background log writer running. Drop it last.
#[derive(Debug)]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a file writer is attached.
    pub fn has_file_writer(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Path of the log file for a given directory.
pub fn log_file_path(directory: &Path) -> PathBuf {
    directory.join(LOG_FILE_NAME)
}

/// Build the event filter: `RUST_LOG` wins over the configured level.
pub fn filter_for(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(&config.level),
    }
}

fn parse_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
        level: level.to_string(),
        source,
    })
}

/// Install the global subscriber.
///
/// Events go to stderr, and also to `<directory>/edx.log` when a directory
/// is configured.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let filter = filter_for(config)?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339())
        .with_target(false);

    let (file_layer, file_guard) = match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::Directory {
                path: dir.clone(),
                source,
            })?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(dir) = &config.directory {
        tracing::debug!(path = %log_file_path(dir).display(), "File logging enabled");
    }

    Ok(LoggingGuard { file_guard })
}
