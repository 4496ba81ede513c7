//! Core domain models for strip-ifdef.
//!
//! This module contains the fundamental pieces the preprocessor is built
//! from: the symbol set derived from configuration, and the per-line
//! directive classifier. These are pure domain models with no I/O
//! dependencies.

pub mod directive;
pub mod symbols;

pub use directive::{CLOSE_MARKER, Directive, NEGATION_PREFIX, OPEN_MARKER, classify};
pub use symbols::{ConfigValue, NAMESPACE_PREFIX, SymbolSet};
