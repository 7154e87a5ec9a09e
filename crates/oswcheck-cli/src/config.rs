//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments, which take precedence over both

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used for project configuration
pub const PROJECT_CONFIG_STEM: &str = ".oswcheck";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema settings
    pub schema: SchemaConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Schema configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Schema used when `--schema` is not given
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::config(format!(
                "unsupported configuration file '{}', expected .toml, .yaml or .json",
                path.display()
            ))),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let config = match FileFormat::from_path(path)? {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
            FileFormat::Json => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
        };

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for ext in ["toml", "yaml", "json"] {
            paths.push(PathBuf::from(format!("{}.{}", PROJECT_CONFIG_STEM, ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let oswcheck_dir = config_dir.join("oswcheck");
            for ext in ["toml", "yaml", "json"] {
                paths.push(oswcheck_dir.join(format!("config.{}", ext)));
            }
        }

        paths
    }

    /// Serialize to the format named by `path`'s extension
    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        Ok(match FileFormat::from_path(path)? {
            FileFormat::Toml => toml::to_string_pretty(self)?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_for(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
