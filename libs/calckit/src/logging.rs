//! Process-wide `tracing` subscriber setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `info,counter=debug`.
    pub level: String,
    pub format: LogFormat,
    /// Directory for a daily-rotated log file. Console only when unset.
    pub dir: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            dir: None,
            file_prefix: "calc-server.log".to_owned(),
        }
    }
}

/// Keeps the background file writer alive. Dropping it flushes and stops file logging.
#[must_use = "file logging stops when the guard is dropped"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Map `-v` occurrences onto a filter directive; `None` keeps the configured level.
#[must_use]
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the global subscriber.
///
/// Precedence for the filter: `RUST_LOG`, then `-v` flags, then `cfg.level`.
/// A second call is a no-op that keeps the first subscriber.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> LoggingGuard {
    let directive = verbosity_level(verbose).unwrap_or(cfg.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let console = match cfg.format {
        LogFormat::Text => fmt::layer().with_target(true).boxed(),
        LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
    };

    let (file_layer, file_guard) = match cfg.dir.as_ref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, &cfg.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        LoggingGuard { _file: file_guard }
    } else {
        // Someone else owns the global subscriber; let the file worker exit.
        LoggingGuard { _file: None }
    }
}
