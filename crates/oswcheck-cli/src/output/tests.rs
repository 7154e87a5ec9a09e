// Tests for output formatting
//
// These tests verify report rendering in every output format and the
// writer's handling of quiet mode and human-only messages.

use super::*;

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

fn sample_report() -> ValidationReport {
    ValidationReport {
        entries: vec![
            ReportEntry {
                feature_index: -1,
                error: "\"type\" is a required property".to_string(),
            },
            ReportEntry {
                feature_index: 2,
                error: "\"motorway\" is not one of \"footway\", \"steps\"".to_string(),
            },
            ReportEntry {
                feature_index: 7,
                error: "must include one of: crossing, footway".to_string(),
            },
        ],
        raw_error_count: 11,
    }
}

#[test]
fn test_json_report_is_compact_array() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.report(&sample_report()).unwrap();

    let contents = buffer.contents();
    assert!(contents.starts_with("[{\"featureIndex\":-1,\"error\":"));
    assert!(contents.ends_with("}]\n"));
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_empty_report_is_empty_array() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.report(&ValidationReport::default()).unwrap();
    assert_eq!(buffer.contents(), "[]\n");
}

#[test]
fn test_json_keeps_non_ascii() {
    let report = ValidationReport {
        entries: vec![ReportEntry {
            feature_index: 0,
            error: "\"Straße\" is not one of \"footway\", \"steps\"".to_string(),
        }],
        raw_error_count: 1,
    };

    let formatted = OutputFormatter::serialize(&OutputFormat::Json, &report.entries).unwrap().unwrap();
    assert!(formatted.contains("Straße"));
    assert!(!formatted.contains("\\u"));
}

#[test]
fn test_pretty_and_yaml_reports_round_trip() {
    let report = sample_report();

    let pretty = OutputFormatter::serialize(&OutputFormat::JsonPretty, &report.entries).unwrap().unwrap();
    let parsed: Vec<ReportEntry> = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, report.entries);

    let yaml = OutputFormatter::serialize(&OutputFormat::Yaml, &report.entries).unwrap().unwrap();
    assert!(yaml.contains("featureIndex: 2"));
    let parsed: Vec<ReportEntry> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, report.entries);
}

#[test]
fn test_human_report_table() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.report(&sample_report()).unwrap();

    let contents = buffer.contents();
    assert!(contents.contains("2 feature(s) failed validation plus document-level errors (11 raw errors)"));
    assert!(contents.contains("Feature  │ Error"));
    assert!(contents.contains("document │ \"type\" is a required property"));
    assert!(contents.contains("7        │ must include one of: crossing, footway"));
}

#[test]
fn test_human_report_for_valid_document() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.report(&ValidationReport::default()).unwrap();
    assert!(buffer.contents().contains("No schema violations found"));
}

#[test]
fn test_human_format_has_no_serialization() {
    assert!(OutputFormatter::serialize(&OutputFormat::Human, &sample_report().entries).unwrap().is_none());
}

#[test]
fn test_human_messages_suppressed_for_machine_formats() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.section("Validation").unwrap();
    out.info("loading schema").unwrap();
    out.success("done").unwrap();
    out.debug("details").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_quiet_mode_keeps_report() {
    let (mut out, buffer) = writer(OutputFormat::Human, true);
    out.info("loading schema").unwrap();
    out.success("done").unwrap();
    assert_eq!(buffer.contents(), "");

    out.report(&sample_report()).unwrap();
    assert!(buffer.contents().starts_with("❌ 2 feature(s) failed validation"));
}

#[test]
fn test_yaml_report_ends_with_single_newline() {
    let (mut out, buffer) = writer(OutputFormat::Yaml, false);
    out.report(&sample_report()).unwrap();
    let contents = buffer.contents();
    assert!(contents.ends_with('\n'));
    assert!(!contents.ends_with("\n\n"));
}

#[test]
fn test_output_writer_creation() {
    let out = OutputWriter::new(OutputFormat::Human, false, true, 0);
    assert!(out.spinner("validating").is_none());
}

#[test]
fn test_feature_label() {
    let entry = ReportEntry {
        feature_index: -1,
        error: String::new(),
    };
    assert_eq!(feature_label(&entry), "document");

    let entry = ReportEntry {
        feature_index: 12,
        error: String::new(),
    };
    assert_eq!(feature_label(&entry), "12");
}

#[test]
fn test_summary_per_format() {
    let value = serde_json::json!({"features": 2});
    let lines = vec!["✓ wrote 2 features".to_string()];

    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.summary(&value, &lines).unwrap();
    assert_eq!(buffer.contents(), "{\"features\":2}\n");

    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.summary(&value, &lines).unwrap();
    assert_eq!(buffer.contents(), "✓ wrote 2 features\n");
}
