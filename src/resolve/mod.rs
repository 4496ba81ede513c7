//! Directive region resolution.
//!
//! This is the algorithmic heart of the crate: a single-pass state machine
//! that matches open/close markers at arbitrary nesting depth and splices
//! the line buffer according to each region's retain-or-strip decision.

pub mod resolver;

pub use resolver::{resolve_lines, strip_decision};
