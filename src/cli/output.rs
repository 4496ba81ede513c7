//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::SymbolSet;
use crate::error::Error;
use crate::rewrite::RewriteOutcome;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Per-file report produced by the `run` command.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the processed file, relative to the scanned root.
    pub path: String,
    /// Whether the preprocessor produced rewritten text.
    pub changed: bool,
    /// Loader hint for changed files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

/// Formats the result of preprocessing a single file.
///
/// Text mode prints the (possibly unchanged) file content verbatim; JSON
/// mode serializes the outcome signal itself so hosts can distinguish
/// "unchanged" from a rewrite.
#[must_use]
pub fn format_file_outcome(
    original: &str,
    outcome: &RewriteOutcome,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => match outcome {
            RewriteOutcome::Unchanged => original.to_string(),
            RewriteOutcome::Rewritten { text, .. } => text.clone(),
        },
        OutputFormat::Json => format_json(outcome),
    }
}

/// Formats the resolved symbol set.
#[must_use]
pub fn format_symbols(symbols: &SymbolSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if symbols.is_empty() {
                return "No symbols defined.\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(output, "Defined symbols ({}):", symbols.len());
            for name in symbols.iter() {
                let _ = writeln!(output, "  {name}");
            }
            output
        }
        OutputFormat::Json => format_json(symbols),
    }
}

/// Formats the per-file reports of a `run` invocation.
#[must_use]
pub fn format_run_reports(reports: &[FileReport], wrote: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let changed = reports.iter().filter(|r| r.changed).count();
            for report in reports {
                if report.changed {
                    let verb = if wrote { "rewrote" } else { "would rewrite" };
                    match &report.loader {
                        Some(loader) => {
                            let _ = writeln!(output, "{verb} {} ({loader})", report.path);
                        }
                        None => {
                            let _ = writeln!(output, "{verb} {}", report.path);
                        }
                    }
                }
            }
            let _ = writeln!(
                output,
                "{changed} of {} eligible file(s) changed",
                reports.len()
            );
            output
        }
        OutputFormat::Json => format_json(&reports),
    }
}

/// Formats an error per output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
