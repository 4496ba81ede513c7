//! # strip-ifdef
//!
//! Line-oriented `//#ifdef` conditional-compilation preprocessor for JS/TS
//! sources.
//!
//! Given source text containing `//#ifdef NAME ... //#endif` regions and a
//! set of defined symbol names, the preprocessor strips or retains each
//! region: markers are always removed, the body survives only when the
//! region's symbol is defined. Regions nest to arbitrary depth; an
//! expression prefixed with `!` is always retained.
//!
//! ## Features
//!
//! - **Single-pass resolution**: linear-time region resolution with an
//!   explicit frame stack
//! - **Fast path**: marker-free files are reported unchanged without ever
//!   being split into lines
//! - **File selection**: top-level directory filtering with exclusion lists
//!   and `js`/`ts`/`tsx` extension matching
//! - **Parallel runs**: independent files are processed concurrently against
//!   the immutable symbol set

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod resolve;
pub mod rewrite;
pub mod select;

// Re-export commonly used types at crate root
pub use error::{DirectiveError, Error, IoError, Result};

// Re-export core domain types
pub use core::{CLOSE_MARKER, ConfigValue, Directive, OPEN_MARKER, SymbolSet, classify};

// Re-export resolution and rewriting entry points
pub use resolve::{resolve_lines, strip_decision};
pub use rewrite::{RewriteOutcome, rewrite_file, rewrite_text};

// Re-export file selection
pub use select::{DEFAULT_EXCLUDES, SelectionGate};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
