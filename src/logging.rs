//! Logging Setup
//!
//! Installs the global `tracing` subscriber for the binaries. `RUST_LOG`
//! takes precedence over the configured level. The terminal dashboard owns
//! the screen, so it logs to a file instead of stderr.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::config::LoggingConfig;

/// Where log lines are written
#[derive(Debug, Clone)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

/// Logging setup errors
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Default filter directives for a configured level
///
/// HTTP client internals stay at `warn` so debug runs remain readable.
pub fn filter_directives(level: &str) -> String {
    format!("{},hyper=warn,h2=warn,reqwest=warn", level.trim().to_lowercase())
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Open (creating parents) a log file in append mode
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let io_err = |source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig, sink: LogSink) -> Result<(), LoggingError> {
    let (writer, ansi) = match &sink {
        LogSink::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogSink::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
    };

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_filter(&config.level))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives("debug"), "debug,hyper=warn,h2=warn,reqwest=warn");
        assert_eq!(filter_directives(" WARN "), "warn,hyper=warn,h2=warn,reqwest=warn");
        assert!(EnvFilter::try_new(filter_directives("trace")).is_ok());
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("guardian.log");

        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
    }
}
