//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strip-ifdef: line-oriented `//#ifdef` preprocessor for JS/TS sources.
///
/// Strips or retains `//#ifdef NAME ... //#endif` regions based on a set of
/// defined symbols gathered from explicit definitions, a JSON config
/// mapping, and/or the process environment.
#[derive(Parser, Debug)]
#[command(name = "strip-ifdef")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Define a symbol (repeatable).
    #[arg(short = 'D', long = "define", value_name = "NAME", global = true)]
    pub define: Vec<String>,

    /// JSON file whose top-level object is the configuration mapping.
    ///
    /// Keys may carry the `process.env.` prefix; boolean `true` and any
    /// non-null, non-boolean value define the key as a symbol.
    #[arg(short, long, global = true, value_name = "FILE", env = "STRIP_IFDEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Import the process environment as configuration.
    ///
    /// Every environment variable becomes a defined symbol (string values
    /// define by presence).
    #[arg(long, global = true)]
    pub env: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preprocess a single file and print the result to stdout.
    File {
        /// Path to the source file.
        path: PathBuf,
    },

    /// Process every eligible file under a root directory.
    ///
    /// Eligible files live under a non-excluded top-level directory and
    /// carry a .js, .ts, or .tsx extension. Without --write this is a
    /// dry run that only reports what would change.
    Run {
        /// Root directory to scan.
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Rewrite changed files in place.
        #[arg(short, long)]
        write: bool,

        /// Top-level directory name to exclude (repeatable; replaces the
        /// default list of dist, vendor, node_modules, .git).
        #[arg(short = 'x', long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,
    },

    /// Print the resolved symbol set.
    Symbols,
}
