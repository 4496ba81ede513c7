//! CLI layer for strip-ifdef.
//!
//! Provides the command-line interface using clap, with commands for
//! preprocessing single files, scanning project trees, and inspecting the
//! resolved symbol set.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
