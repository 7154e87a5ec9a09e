//! Logging utilities for the OSWCheck CLI
//!
//! This module provides:
//! - Run ID generation and tracking
//! - Performance timing spans
//! - Structured logging setup on stderr or a log file
//! - Multiple output formats (compact, full, JSON)
//!
//! Logs never go to stdout, which carries only the validation report.

use crate::config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{field, Span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Global run ID for the current invocation
static RUN_ID: OnceLock<String> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Optional file output path
    pub file: Option<PathBuf>,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            "json" => Ok(Self::Json),
            other => Err(Error::config(format!(
                "invalid log format '{}', expected compact, full or json",
                other
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            file: None,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply the `[logging]` section of the configuration file
    ///
    /// An explicit `-v` on the command line keeps its level.
    pub fn merge_with_file_config(&mut self, file_config: &config::LoggingConfig, verbosity: u8) -> Result<()> {
        if verbosity == 0 {
            self.level = file_config.level.clone();
        }
        if self.format != LogFormat::Full {
            self.format = file_config.format.parse()?;
        }
        if file_config.file.is_some() {
            self.file = file_config.file.clone();
        }
        Ok(())
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        // OSWCHECK_LOG_FORMAT
        if let Ok(format) = std::env::var("OSWCHECK_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(_) => eprintln!("Warning: invalid log format '{}', using default", format),
            }
        }

        // OSWCHECK_LOG_FILE
        if let Ok(file) = std::env::var("OSWCHECK_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
    }
}

/// Initialize the global logging system
///
/// The returned guard flushes the file sink when dropped and must be kept
/// alive until the program exits.
pub fn init_logging(config: LoggingConfig) -> Result<Option<WorkerGuard>> {
    // Create environment filter
    let env_filter = create_env_filter(&config)?;
    let (writer, guard, ansi) = create_writer(&config)?;

    // Use different subscriber based on format to avoid type conflicts
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false) // JSON should not have ANSI codes
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
    }

    // Generate and store run ID
    let run_id = generate_run_id();
    RUN_ID.set(run_id.clone()).map_err(|_| {
        Error::other("Failed to set run ID - run tracking may not work correctly")
    })?;

    tracing::info!(
        run_id = %run_id,
        config = ?config,
        "Logging system initialized"
    );

    Ok(guard)
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Pick the log sink: the configured file, else stderr
fn create_writer(config: &LoggingConfig) -> Result<(BoxMakeWriter, Option<WorkerGuard>, bool)> {
    match &config.file {
        Some(path) => {
            let (directory, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            Ok((BoxMakeWriter::new(non_blocking), Some(guard), false))
        }
        None => {
            let ansi = config.console && std::io::stderr().is_terminal();
            Ok((BoxMakeWriter::new(std::io::stderr), None, ansi))
        }
    }
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::config(format!("Invalid log file path '{}'", path.display())))?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, PathBuf::from(file_name)))
}

/// Generate a unique run ID for this invocation
pub fn generate_run_id() -> String {
    format!("run_{}", Uuid::new_v4().simple())
}

/// Get the current run ID
pub fn current_run_id() -> Option<&'static str> {
    RUN_ID.get().map(|s| s.as_str())
}

/// Create a span with run ID and timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        run_id = current_run_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that automatically logs duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self::start(operation, None)
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self::start(operation, Some(details))
        }

        fn start(operation: &str, details: Option<&str>) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, details),
                operation: operation.to_string(),
            }
        }

        /// Get elapsed time without finishing the timer
        pub fn elapsed(&self) -> std::time::Duration {
            self.start.elapsed()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis(),
                "Operation completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_from_verbosity() {
        let config = LoggingConfig::from_verbosity(0);
        assert_eq!(config.level, "warn");
        assert!(!config.source_location);

        let config = LoggingConfig::from_verbosity(1);
        assert_eq!(config.level, "info");

        let config = LoggingConfig::from_verbosity(2);
        assert_eq!(config.level, "debug");
        assert!(config.source_location);

        let config = LoggingConfig::from_verbosity(3);
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Full);
        assert!(config.thread_ids);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_file_config_respects_explicit_verbosity() {
        let file_config = config::LoggingConfig {
            level: "error".to_string(),
            format: "json".to_string(),
            file: Some(PathBuf::from("logs/oswcheck.log")),
        };

        let mut quiet = LoggingConfig::from_verbosity(0);
        quiet.merge_with_file_config(&file_config, 0).unwrap();
        assert_eq!(quiet.level, "error");
        assert_eq!(quiet.format, LogFormat::Json);
        assert_eq!(quiet.file, Some(PathBuf::from("logs/oswcheck.log")));

        let mut verbose = LoggingConfig::from_verbosity(2);
        verbose.merge_with_file_config(&file_config, 2).unwrap();
        assert_eq!(verbose.level, "debug");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("oswcheck.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("oswcheck.log"));

        let (dir, file) = split_log_path(Path::new("/var/log/oswcheck/run.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/oswcheck"));
        assert_eq!(file, PathBuf::from("run.log"));
    }

    #[test]
    fn test_run_id_format() {
        let id = generate_run_id();
        assert!(id.starts_with("run_"));
        assert_eq!(id.len(), 4 + 32);
    }
}
