//! OSWCheck CLI - Command-line interface for GeoJSON feature validation
//!
//! This is the main entry point for the OSWCheck CLI application, providing
//! commands for validating OpenSidewalks-style feature collections against a
//! JSON Schema and managing configuration.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;
use tracing_appender::non_blocking::WorkerGuard;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so its [logging] section applies
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.use_color(), None),
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    let guard = match init_logging(&cli, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    // Run the application
    match run(cli, &config, use_color) {
        Ok(()) => {
            drop(guard);
            process::exit(0);
        }
        Err(e) => exit_with(&e, use_color, guard),
    }
}

/// Report an error on stderr and exit with its code
fn exit_with(e: &error::Error, use_color: bool, guard: Option<WorkerGuard>) -> ! {
    if !e.is_silent() {
        eprintln!("{}", error::format_error(e, use_color));

        if e.should_show_help() {
            eprintln!("\nFor more information, try '--help'");
        }
    }

    // Flush the log file before exiting
    drop(guard);
    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Command line wins over the configuration file
    let format = cli.output.unwrap_or(config.output.format);

    // Create output writer
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        format = ?format,
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::Sample(args) => handlers::handle_sample(args, config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<Option<WorkerGuard>> {
    // Create logging configuration from CLI args, the config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file_config(&config.logging, cli.verbosity_level())?;
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}
