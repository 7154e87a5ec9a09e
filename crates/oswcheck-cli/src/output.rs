//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with support for
//! validation reports and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use oswcheck_schemas::{ReportEntry, ValidationReport};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tracing::trace;

/// Label for entries that do not belong to any feature
const DOCUMENT_LABEL: &str = "document";

/// Serialization of output values for machine-readable formats
pub trait OutputFormatter {
    /// Serialize a value, or `None` when the format is meant for humans
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Option<String>>;
}

impl OutputFormatter for OutputFormat {
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Option<String>> {
        let document = match self {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Human => return Ok(None),
        };
        Ok(Some(document))
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet
                && format == OutputFormat::Human
                && io::stdout().is_terminal()
                && io::stderr().is_terminal(),
            quiet,
            verbose,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            verbose,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose > 0 && self.format == OutputFormat::Human {
            if self.use_color {
                self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
            } else {
                self.writeln(&format!("DEBUG: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a validation report in the configured format
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        trace!(entries = report.entries.len(), "Writing report");

        // Machine formats carry only the entries array
        match OutputFormatter::serialize(&self.format, &report.entries)? {
            Some(document) => self.write_document(&document),
            None => self.report_table(report),
        }
    }

    /// Write a command summary; human output gets `lines` instead
    pub fn summary<T: Serialize>(&mut self, value: &T, lines: &[String]) -> Result<()> {
        match OutputFormatter::serialize(&self.format, value)? {
            Some(document) => self.write_document(&document),
            None => lines.iter().try_for_each(|line| self.success(line)),
        }
    }

    /// Machine-readable documents end with exactly one newline
    fn write_document(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }

    fn report_table(&mut self, report: &ValidationReport) -> Result<()> {
        if report.is_valid() {
            return self.success("✅ No schema violations found");
        }

        let summary = report_summary(report);
        if self.use_color {
            self.writeln(&summary.red().bold().to_string())?;
        } else {
            self.writeln(&summary)?;
        }
        self.writeln("")?;

        let rows = report
            .entries
            .iter()
            .map(|entry| vec![feature_label(entry), entry.error.clone()])
            .collect();
        self.table(&["Feature", "Error"], rows)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        // Print header
        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        // Print separator
        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        // Print rows
        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Row label for a report entry
fn feature_label(entry: &ReportEntry) -> String {
    if entry.feature_index < 0 {
        DOCUMENT_LABEL.to_string()
    } else {
        entry.feature_index.to_string()
    }
}

fn report_summary(report: &ValidationReport) -> String {
    let features = report.feature_count();
    let document_level = report.len() - features;

    let mut summary = format!("❌ {} feature(s) failed validation", features);
    if document_level > 0 {
        summary.push_str(" plus document-level errors");
    }
    summary.push_str(&format!(" ({} raw errors)", report.raw_error_count));
    summary
}

/// Writer that keeps everything written for later inspection
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
