//! Sample generation command handler

use super::validate::resolve_schema_path;
use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use oswcheck_schemas::{feature_count, generate_samples, SampleOptions, SchemaLoader};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What the sample command wrote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleSummary {
    valid_out: PathBuf,
    invalid_out: PathBuf,
    features: usize,
    seed: u64,
}

/// Handle the sample command
#[instrument(skip(config, output), fields(tags = ?args.tags, seed = args.seed))]
pub fn handle_sample(args: SampleArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("sample_command");

    let schema_path = resolve_schema_path(args.schema.as_deref(), config)?;
    let schema = SchemaLoader::new().load_schema(&schema_path)?;

    let options = SampleOptions {
        tags: args.tags,
        features_per_tag: args.count,
        seed: args.seed,
    };
    let samples = generate_samples(&schema, &options)?;

    write_collection(&args.valid_out, &samples.valid)?;
    write_collection(&args.invalid_out, &samples.invalid)?;

    let features = feature_count(&samples.valid);
    info!(features, "Samples written");

    let lines = vec![
        format!("✓ Wrote {} valid feature(s) to {}", features, args.valid_out.display()),
        format!("✓ Wrote {} invalid feature(s) to {}", features, args.invalid_out.display()),
    ];
    let summary = SampleSummary {
        valid_out: args.valid_out,
        invalid_out: args.invalid_out,
        features,
        seed: args.seed,
    };
    output.summary(&summary, &lines)
}

/// Write a collection as pretty JSON with a trailing newline
fn write_collection(path: &Path, collection: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(collection)?;
    content.push('\n');
    std::fs::write(path, content)?;
    debug!(path = %path.display(), "Sample written");
    Ok(())
}
