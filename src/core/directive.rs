//! Line classification for directive markers.
//!
//! Classification is purely local to one line: a line opens a region, closes
//! one, or is plain text. No state is consulted. Matching is case-sensitive
//! and anchored to the start of the line; leading whitespace disqualifies a
//! marker.

/// Literal marker opening a conditional region.
pub const OPEN_MARKER: &str = "//#ifdef";

/// Literal marker closing a conditional region.
pub const CLOSE_MARKER: &str = "//#endif";

/// Negation prefix on a directive expression.
pub const NEGATION_PREFIX: char = '!';

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Line opens a region; carries the trimmed expression text.
    Open {
        /// The expression after the marker, trimmed of surrounding
        /// whitespace: a bare symbol name, optionally prefixed with `!`.
        expression: &'a str,
    },

    /// Line closes the nearest open region.
    Close,

    /// Ordinary text line.
    Plain,
}

/// Classifies a line by literal prefix match.
///
/// The open marker wins when both could match (they can't: the tokens differ
/// at their fourth byte, but the order mirrors the scan anyway).
///
/// # Examples
///
/// ```
/// use strip_ifdef::core::{Directive, classify};
///
/// assert_eq!(
///     classify("//#ifdef DEBUG"),
///     Directive::Open { expression: "DEBUG" }
/// );
/// assert_eq!(classify("//#endif"), Directive::Close);
/// assert_eq!(classify("let x = 1;"), Directive::Plain);
/// ```
#[must_use]
pub fn classify(line: &str) -> Directive<'_> {
    if let Some(rest) = line.strip_prefix(OPEN_MARKER) {
        Directive::Open {
            expression: rest.trim(),
        }
    } else if line.starts_with(CLOSE_MARKER) {
        Directive::Close
    } else {
        Directive::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("//#ifdef FOO", "FOO"; "simple symbol")]
    #[test_case("//#ifdef !FOO", "!FOO"; "negated symbol")]
    #[test_case("//#ifdef   FOO  ", "FOO"; "surrounding whitespace trimmed")]
    #[test_case("//#ifdef", ""; "bare marker yields empty expression")]
    #[test_case("//#ifdef FOO\r", "FOO"; "trailing carriage return trimmed")]
    fn test_open_lines(line: &str, expected: &str) {
        assert_eq!(
            classify(line),
            Directive::Open {
                expression: expected
            }
        );
    }

    #[test_case("//#endif"; "bare close")]
    #[test_case("//#endif FOO"; "trailing text ignored")]
    #[test_case("//#endif\r"; "trailing carriage return")]
    fn test_close_lines(line: &str) {
        assert_eq!(classify(line), Directive::Close);
    }

    #[test_case(""; "empty line")]
    #[test_case("let x = 1;"; "code line")]
    #[test_case("  //#ifdef FOO"; "leading whitespace disqualifies open")]
    #[test_case("\t//#endif"; "leading tab disqualifies close")]
    #[test_case("// #ifdef FOO"; "space inside marker")]
    #[test_case("//#IFDEF FOO"; "case sensitive")]
    #[test_case("/#ifdef FOO"; "truncated marker")]
    fn test_plain_lines(line: &str) {
        assert_eq!(classify(line), Directive::Plain);
    }

    #[test]
    fn test_marker_prefix_of_longer_token() {
        // Prefix matching is intentional: "//#ifdefFOO" still opens, with
        // expression "FOO".
        assert_eq!(
            classify("//#ifdefFOO"),
            Directive::Open { expression: "FOO" }
        );
    }
}
