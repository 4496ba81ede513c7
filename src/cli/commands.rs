//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    FileReport, OutputFormat, format_file_outcome, format_run_reports, format_symbols,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{ConfigValue, SymbolSet};
use crate::error::{Error, Result};
use crate::io::{read_file, write_file};
use crate::rewrite::{RewriteOutcome, loader_hint, rewrite_file, rewrite_text};
use crate::select::SelectionGate;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    // Built once; everything downstream sees it read-only.
    let symbols = build_symbols(cli)?;

    match &cli.command {
        Commands::File { path } => cmd_file(path, &symbols, format),
        Commands::Run {
            root,
            write,
            exclude,
        } => cmd_run(root, *write, exclude, &symbols, format),
        Commands::Symbols => Ok(format_symbols(&symbols, format)),
    }
}

/// Gathers the symbol set from environment, config file, and -D flags.
fn build_symbols(cli: &Cli) -> Result<SymbolSet> {
    let mut symbols = if cli.env {
        SymbolSet::from_env()
    } else {
        SymbolSet::new()
    };

    if let Some(path) = &cli.config {
        let raw = read_file(path)?;
        let mapping: HashMap<String, ConfigValue> = serde_json::from_str(&raw).map_err(|e| {
            Error::config(format!(
                "invalid config mapping in {}: {e}",
                path.display()
            ))
        })?;
        symbols.extend_config(mapping);
    }

    for name in &cli.define {
        symbols.define(name);
    }

    Ok(symbols)
}

fn cmd_file(path: &Path, symbols: &SymbolSet, format: OutputFormat) -> Result<String> {
    let original = read_file(path)?;
    let outcome = match rewrite_text(&original, symbols)? {
        Some(text) => RewriteOutcome::Rewritten {
            text,
            loader: loader_hint(path),
        },
        None => RewriteOutcome::Unchanged,
    };
    Ok(format_file_outcome(&original, &outcome, format))
}

fn cmd_run(
    root: &Path,
    write: bool,
    exclude: &[String],
    symbols: &SymbolSet,
    format: OutputFormat,
) -> Result<String> {
    let gate = if exclude.is_empty() {
        SelectionGate::with_default_excludes(root)?
    } else {
        SelectionGate::new(root, exclude)?
    };
    let files = gate.eligible_files()?;

    // Symbol set and gate are frozen by now; per-file work shares nothing
    // mutable, so files can be processed in parallel.
    let results: Vec<Result<FileReport>> = files
        .par_iter()
        .map(|path| process_file(path, root, write, symbols))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    for result in results {
        reports.push(result?);
    }
    Ok(format_run_reports(&reports, write, format))
}

/// Preprocesses one eligible file, writing it back when requested.
fn process_file(
    path: &Path,
    root: &Path,
    write: bool,
    symbols: &SymbolSet,
) -> Result<FileReport> {
    let display = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    let outcome = rewrite_file(path, symbols).map_err(|e| Error::File {
        path: display.clone(),
        source: Box::new(e),
    })?;

    match outcome {
        RewriteOutcome::Rewritten { text, loader } => {
            if write {
                write_file(path, &text)?;
            }
            Ok(FileReport {
                path: display,
                changed: true,
                loader,
            })
        }
        RewriteOutcome::Unchanged => Ok(FileReport {
            path: display,
            changed: false,
            loader: None,
        }),
    }
}
