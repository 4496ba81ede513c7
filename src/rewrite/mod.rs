//! Text rewriting orchestration.
//!
//! Ties the scanner and resolver together over a whole file's text, with a
//! fast path for marker-free input and a loader hint for host pipelines.

pub mod rewriter;

pub use rewriter::{RewriteOutcome, loader_hint, rewrite_file, rewrite_text};
