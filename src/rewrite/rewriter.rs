//! Whole-text rewriting for one file.
//!
//! Orchestrates the directive scanner and region resolver over a file's
//! text. Texts without any open marker take a fast path that never builds a
//! line buffer and report a distinguished "unchanged" outcome, so hosts can
//! skip re-emitting identical content.

use crate::core::{OPEN_MARKER, SymbolSet};
use crate::error::Result;
use crate::io::read_file;
use crate::resolve::resolve_lines;
use serde::Serialize;
use std::path::Path;

/// Result of running the preprocessor over one file's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RewriteOutcome {
    /// The input contained no open marker; the caller's text stands as-is.
    Unchanged,

    /// Regions were resolved and the text rewritten.
    Rewritten {
        /// The transformed text.
        text: String,
        /// Loader hint for the host pipeline, derived from the file
        /// extension (`js`, `ts`, `tsx`, ...). Absent for extensionless
        /// paths.
        loader: Option<String>,
    },
}

impl RewriteOutcome {
    /// Returns whether this outcome carries rewritten text.
    #[must_use]
    pub const fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }
}

/// Rewrites raw text against the symbol set.
///
/// Returns `None` when the text contains no open marker anywhere (the fast
/// path: the input is byte-for-byte the caller's, no line buffer is built).
/// Otherwise splits on `\n`, resolves every region, and rejoins with `\n`.
/// CR bytes of CRLF input travel inside the line content and survive
/// untouched.
///
/// # Errors
///
/// Returns [`crate::error::DirectiveError::Unterminated`] when an open
/// marker has no matching close.
///
/// # Examples
///
/// ```
/// use strip_ifdef::core::SymbolSet;
/// use strip_ifdef::rewrite::rewrite_text;
///
/// let symbols: SymbolSet = ["DEBUG".to_string()].into_iter().collect();
/// let text = "//#ifdef DEBUG\nlog();\n//#endif\nrun();";
/// let rewritten = rewrite_text(text, &symbols).unwrap();
/// assert_eq!(rewritten.as_deref(), Some("log();\nrun();"));
///
/// assert!(rewrite_text("run();", &symbols).unwrap().is_none());
/// ```
pub fn rewrite_text(text: &str, symbols: &SymbolSet) -> Result<Option<String>> {
    if !text.contains(OPEN_MARKER) {
        return Ok(None);
    }
    let lines: Vec<&str> = text.split('\n').collect();
    let resolved = resolve_lines(&lines, symbols)?;
    Ok(Some(resolved.join("\n")))
}

/// Reads `path` and rewrites its text against the symbol set.
///
/// # Errors
///
/// Propagates read failures unchanged (no retry) and unterminated-directive
/// errors from resolution.
pub fn rewrite_file<P: AsRef<Path>>(path: P, symbols: &SymbolSet) -> Result<RewriteOutcome> {
    let path = path.as_ref();
    let text = read_file(path)?;
    match rewrite_text(&text, symbols)? {
        Some(text) => Ok(RewriteOutcome::Rewritten {
            text,
            loader: loader_hint(path),
        }),
        None => Ok(RewriteOutcome::Unchanged),
    }
}

/// Derives the loader hint from a path's extension.
#[must_use]
pub fn loader_hint(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
}
