use serde::Deserialize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read logging config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse logging config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid filter directive '{directive}' in logging config: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("Failed to open log sink '{path}': {source}")]
    Sink {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Declarative logging configuration, loaded from a TOML file at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive understood by tracing's `EnvFilter`, e.g. "debug" or
    /// "log_viewer=debug".
    pub level: String,
    /// Append-mode file sink. Missing parent directories are created before
    /// the sink is opened; stderr is used when absent.
    pub file: Option<PathBuf>,
    /// ANSI color on the stderr sink. File sinks are always plain.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            ansi: true,
        }
    }
}

pub fn load_logging_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<LoggingConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

/// Open the file sink named by the config, creating missing parent
/// directories first.
pub fn prepare_file_sink(path: &Path) -> Result<File, ConfigError> {
    let as_sink_error = |source| ConfigError::Sink {
        path: path.display().to_string(),
        source,
    };

    paths::ensure_parent_dirs(path).map_err(as_sink_error)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(as_sink_error)
}

/// Load the logging configuration and install the global tracing subscriber.
///
/// Call once at startup; a second call panics when installing the
/// subscriber.
pub fn setup_logging(config_path: &Path) -> Result<(), ConfigError> {
    let config = load_logging_config(config_path)?;

    let filter = EnvFilter::try_new(&config.level).map_err(|source| ConfigError::Filter {
        directive: config.level.clone(),
        source,
    })?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.file {
        Some(path) => {
            let sink = prepare_file_sink(path)?;
            builder.with_ansi(false).with_writer(Arc::new(sink)).init();
        }
        None => builder
            .with_ansi(config.ansi)
            .with_writer(std::io::stderr)
            .init(),
    }

    Ok(())
}
