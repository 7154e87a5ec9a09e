//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use oswcheck_schemas::{FeatureCollectionValidator, SchemaLoader, ValidationReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Handle the validate command
#[instrument(skip(config, output), fields(document = %args.document.display()))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details(
        "validate_command",
        &format!("document: {}", args.document.display()),
    );

    let schema_path = resolve_schema_path(args.schema.as_deref(), config)?;
    info!(schema = %schema_path.display(), "Starting validation");

    output.section("Validation")?;
    output.info(&format!("Schema:   {}", schema_path.display()))?;
    output.info(&format!("Document: {}", args.document.display()))?;

    let spinner = output.spinner("Validating feature collection...");
    let outcome = validate_files(&schema_path, &args.document);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = outcome?;

    // Violations are the report itself, not a warning
    info!(
        valid = report.is_valid(),
        features = report.feature_count(),
        entries = report.len(),
        raw_errors = report.raw_error_count,
        "Validation complete"
    );

    output.report(&report)?;
    output.debug(&format!("{} raw validator errors", report.raw_error_count))?;

    if args.fail_on_errors && !report.is_valid() {
        return Err(Error::ValidationFailed {
            count: report.len(),
        });
    }

    Ok(())
}

/// Schema from `--schema`/`OSWCHECK_SCHEMA`, else from the configuration
pub(crate) fn resolve_schema_path(cli_schema: Option<&Path>, config: &Config) -> Result<PathBuf> {
    match (cli_schema, &config.schema.path) {
        (Some(path), _) => Ok(path.to_path_buf()),
        (None, Some(path)) => {
            debug!(schema = %path.display(), "Using schema from configuration");
            Ok(path.clone())
        }
        (None, None) => Err(Error::MissingSchema),
    }
}

/// Load both inputs and run the reduction pipeline
fn validate_files(schema_path: &Path, document_path: &Path) -> Result<ValidationReport> {
    let validator = {
        let _timer = Timer::new("schema_loading");
        FeatureCollectionValidator::from_path(schema_path)?
    };

    let document = {
        let _timer = Timer::new("document_loading");
        SchemaLoader::new().load_document(document_path)?
    };

    let timer = Timer::new("validation");
    let report = validator.validate(&document);
    debug!(elapsed_ms = timer.elapsed().as_millis() as u64, "Validation finished");

    Ok(report)
}
