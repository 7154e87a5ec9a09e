//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// OSWCheck CLI - Per-feature validation of GeoJSON feature collections
///
/// Validates an OpenSidewalks-style GeoJSON FeatureCollection against a
/// JSON Schema (Draft 7) and reports one representative error per feature.
#[derive(Parser, Debug)]
#[command(
    name = "oswcheck",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "OSWCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: json]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a GeoJSON feature collection against a schema
    Validate(ValidateArgs),

    /// Generate valid and invalid sample collections from schema definitions
    Sample(SampleArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the GeoJSON document (JSON, GeoJSON or YAML)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Path to the JSON Schema (Draft 7)
    #[arg(short, long, value_name = "SCHEMA", env = "OSWCHECK_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Exit with status 1 when the report is not empty
    #[arg(long)]
    pub fail_on_errors: bool,
}

/// Arguments for the sample command
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Definition names to draw features from (e.g. Sidewalk Bench)
    #[arg(value_name = "TAG", required = true)]
    pub tags: Vec<String>,

    /// Path to the JSON Schema holding the definitions
    #[arg(short, long, value_name = "SCHEMA", env = "OSWCHECK_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Features generated per tag
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for coordinates and sampled values
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Where to write the valid collection
    #[arg(long, value_name = "PATH", default_value = "valid_sample.geojson")]
    pub valid_out: PathBuf,

    /// Where to write the invalid collection
    #[arg(long, value_name = "PATH", default_value = "invalid_sample.geojson")]
    pub invalid_out: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file (.oswcheck.toml)
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Destination file
    #[arg(long, value_name = "PATH", default_value = ".oswcheck.toml")]
    pub path: PathBuf,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON array, one line
    #[default]
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
    /// Human-readable formatted output
    Human,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
