//! Logging setup on top of `tracing-subscriber`.
//!
//! The library crates only emit events; this module decides where they go.
//!
//! # Log Levels
//!
//! - `error`: command failures
//! - `warn`: addresses that could not be resolved
//! - `info`: command progress
//! - `debug`: provider requests and responses (status and counts only)
//! - `trace`: classifier misses
//!
//! Insured names and addresses are only written when `--log-data` is given;
//! otherwise [`redact_value`] replaces them.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when value logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const CRATE_TARGETS: &[&str] = &[
    "intake",
    "intake_cli",
    "intake_geocode",
    "intake_model",
    "intake_normalize",
];

/// Returns true if logging of insured values is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the value when `--log-data` is on, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// JSON lines.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the intake crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Whether insured names and addresses may be logged.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from a `-v` count.
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level_filter = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self {
            level_filter,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, enable: bool) -> Self {
        self.use_env_filter = enable;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Directive string for the configured level: intake crates at `level`,
/// everything else at warn.
pub fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let outer = if level_filter < LevelFilter::WARN {
        level.clone()
    } else {
        "warn".to_string()
    };
    let mut directives = vec![outer];
    directives.extend(CRATE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level_filter, LevelFilter::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level_filter, LevelFilter::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level_filter, LevelFilter::DEBUG);
        assert_eq!(LogConfig::from_verbosity(7).level_filter, LevelFilter::TRACE);
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_log_data(true)
            .with_env_filter(false)
            .with_log_file(Some(PathBuf::from("intake.log")));
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.log_data);
        assert!(!config.use_env_filter);
        assert_eq!(config.log_file, Some(PathBuf::from("intake.log")));
    }

    #[test]
    fn test_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("203 S St Marys"), REDACTED_VALUE);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,intake=debug,intake_cli=debug,intake_geocode=debug,\
             intake_model=debug,intake_normalize=debug"
        );
        assert_eq!(
            default_directives(LevelFilter::ERROR),
            "error,intake=error,intake_cli=error,intake_geocode=error,\
             intake_model=error,intake_normalize=error"
        );
    }
}
